use leptos::*;

use super::report_error;
use crate::api;
use crate::auth::SessionCtx;
use crate::components::forms::MessageForm;
use crate::components::{EmptyState, ErrorBanner, Layout, Modal, Spinner};
use crate::logic::format::format_date_time;
use crate::logic::messages::group_by_recipient;
use crate::model::{Employee, Message, MessageDraft, MessageStatus};

#[derive(Clone)]
enum Compose {
    Fresh,
    /// Reply from a history group, with the recipient preselected.
    To(u64),
}

/// Manager messaging screen: sent history grouped by recipient plus a
/// compose modal. The history is refetched after each send so the
/// server-assigned id, timestamp and delivery status appear as stored.
#[component]
pub fn MessagingPage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let messages = create_rw_signal(Vec::<Message>::new());
    let employees = create_rw_signal(Vec::<Employee>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    let compose = create_rw_signal(None::<Compose>);
    let form_busy = create_rw_signal(false);
    let form_error = create_rw_signal(None::<String>);

    {
        let client = session.api();
        spawn_local(async move {
            let (history, staff) = futures::join!(
                api::message::list(&client),
                api::employee::list(&client)
            );
            match history {
                Ok(list) => {
                    let _ = messages.try_set(list);
                }
                Err(err) => report_error(session, error, &err),
            }
            match staff {
                Ok(list) => {
                    let _ = employees.try_set(list);
                }
                Err(err) => report_error(session, error, &err),
            }
            let _ = loading.try_set(false);
        });
    }

    let groups = move || group_by_recipient(&messages.get());

    let active_employees = move || -> Vec<Employee> {
        employees
            .get_untracked()
            .into_iter()
            .filter(|e| e.is_active)
            .collect()
    };

    let close_compose = move || {
        compose.set(None);
        form_error.set(None);
    };

    let send = move |draft: MessageDraft| {
        let client = session.api();
        form_busy.set(true);
        form_error.set(None);
        spawn_local(async move {
            match api::message::send(&client, &draft).await {
                Ok(_) => {
                    match api::message::list(&client).await {
                        Ok(list) => {
                            let _ = messages.try_set(list);
                        }
                        Err(err) => report_error(session, error, &err),
                    }
                    let _ = compose.try_set(None);
                }
                Err(err) => report_error(session, form_error, &err),
            }
            let _ = form_busy.try_set(false);
        });
    };

    view! {
        <Layout>
            <div class="page-header">
                <h1 class="page-title">"Messaging"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        form_error.set(None);
                        compose.set(Some(Compose::Fresh));
                    }
                >
                    "New message"
                </button>
            </div>
            <ErrorBanner error=error/>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                <Show
                    when=move || !groups().is_empty()
                    fallback=|| view! { <EmptyState message="No messages sent yet"/> }
                >
                    <For
                        each=groups
                        key=|(id, _, list)| (*id, list.len())
                        children=move |(recipient_id, recipient_name, list): (u64, String, Vec<Message>)| {
                            let count = if list.len() == 1 {
                                "1 message".to_string()
                            } else {
                                format!("{} messages", list.len())
                            };
                            let items = list
                                .iter()
                                .map(|m| {
                                    let (badge, label) = match m.status {
                                        MessageStatus::Sent => ("badge badge-blue", "Sent"),
                                        MessageStatus::Failed => ("badge badge-red", "Failed"),
                                    };
                                    view! {
                                        <div class="message-item">
                                            <div>
                                                <b>{m.subject.clone()}</b>
                                                <p class="stat-sub">{m.content.clone()}</p>
                                            </div>
                                            <div>
                                                <span class=badge>{label}</span>
                                                <span class="stat-sub">
                                                    {format_date_time(m.sent_at)}
                                                </span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view();
                            view! {
                                <div class="msg-group card">
                                    <div class="page-header">
                                        <div>
                                            <b>{recipient_name}</b>
                                            " "
                                            <span class="stat-sub">{count}</span>
                                        </div>
                                        <button
                                            class="btn btn-secondary btn-sm"
                                            on:click=move |_| {
                                                form_error.set(None);
                                                compose.set(Some(Compose::To(recipient_id)));
                                            }
                                        >
                                            "Message"
                                        </button>
                                    </div>
                                    {items}
                                </div>
                            }
                        }
                    />
                </Show>
            </Show>
            {move || {
                compose
                    .get()
                    .map(|c| {
                        let form = match c {
                            Compose::Fresh => {
                                view! {
                                    <MessageForm
                                        employees=active_employees()
                                        busy=form_busy
                                        error=form_error
                                        on_submit=send
                                        on_cancel=move |_| close_compose()
                                    />
                                }
                                    .into_view()
                            }
                            Compose::To(recipient) => {
                                view! {
                                    <MessageForm
                                        employees=active_employees()
                                        initial_employee=recipient
                                        busy=form_busy
                                        error=form_error
                                        on_submit=send
                                        on_cancel=move |_| close_compose()
                                    />
                                }
                                    .into_view()
                            }
                        };
                        view! {
                            <Modal title="New message" on_close=move |_| close_compose()>
                                {form}
                            </Modal>
                        }
                    })
            }}
        </Layout>
    }
}
