use leptos::*;

use super::report_error;
use crate::api;
use crate::auth::SessionCtx;
use crate::components::{EmptyState, ErrorBanner, Layout, Spinner};
use crate::logic::format::format_date_time;
use crate::logic::messages::inbox_for;
use crate::model::{Message, MessageStatus};

fn status_badge(status: MessageStatus) -> (&'static str, &'static str) {
    match status {
        MessageStatus::Sent => ("badge badge-blue", "Sent"),
        MessageStatus::Failed => ("badge badge-red", "Failed"),
    }
}

/// Employee inbox: own messages as a list with a detail pane.
#[component]
pub fn MessagesPage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let inbox = create_rw_signal(Vec::<Message>::new());
    let selected = create_rw_signal(None::<u64>);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    {
        let client = session.api();
        let cached = session.user();
        spawn_local(async move {
            let me = match cached {
                Some(user) => Some(user),
                None => match api::auth::profile(&client).await {
                    Ok(user) => {
                        session.set_user(user.clone());
                        Some(user)
                    }
                    Err(err) => {
                        report_error(session, error, &err);
                        None
                    }
                },
            };
            if let Some(me) = me {
                match api::message::list(&client).await {
                    Ok(list) => {
                        let own = inbox_for(&list, me.id);
                        let _ = selected.try_set(own.first().map(|m| m.id));
                        let _ = inbox.try_set(own);
                    }
                    Err(err) => report_error(session, error, &err),
                }
            }
            let _ = loading.try_set(false);
        });
    }

    let current = move || {
        let id = selected.get()?;
        inbox.get().into_iter().find(|m| m.id == id)
    };

    view! {
        <Layout>
            <div class="page-header">
                <h1 class="page-title">"Messages"</h1>
            </div>
            <ErrorBanner error=error/>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                <Show
                    when=move || !inbox.get().is_empty()
                    fallback=|| view! { <EmptyState message="No messages yet"/> }
                >
                    <div class="message-layout">
                        <div class="message-list">
                            <For
                                each=move || inbox.get()
                                key=|m| m.id
                                children=move |m: Message| {
                                    let (badge, label) = status_badge(m.status);
                                    let id = m.id;
                                    view! {
                                        <div
                                            class="message-item"
                                            class:selected=move || selected.get() == Some(id)
                                            on:click=move |_| selected.set(Some(id))
                                        >
                                            <div>
                                                <b>{m.subject.clone()}</b>
                                                <div class="stat-sub">
                                                    {format_date_time(m.sent_at)}
                                                </div>
                                            </div>
                                            <span class=badge>{label}</span>
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <div class="card">
                            {move || match current() {
                                Some(m) => {
                                    view! {
                                        <div>
                                            <h2 class="chart-title">{m.subject.clone()}</h2>
                                            <p class="stat-sub">{format_date_time(m.sent_at)}</p>
                                            <p>{m.content.clone()}</p>
                                        </div>
                                    }
                                        .into_view()
                                }
                                None => {
                                    view! { <p class="stat-sub">"Select a message"</p> }.into_view()
                                }
                            }}
                        </div>
                    </div>
                </Show>
            </Show>
        </Layout>
    }
}
