use leptos::*;
use leptos_router::A;

use crate::auth::SessionCtx;
use crate::model::Role;

/// Navigation entries per role; exhaustive over [`Role`] so adding a
/// role forces a decision here.
fn links_for(role: Role) -> Vec<(&'static str, &'static str)> {
    match role {
        Role::Manager => vec![
            ("/dashboard/departments", "Departments"),
            ("/dashboard/employees", "Employees"),
            ("/dashboard/salaries", "Salaries"),
            ("/dashboard/leaves", "Leave Management"),
            ("/dashboard/messaging", "Messaging"),
            ("/dashboard/analytics", "Analytics"),
        ],
        Role::Employee => vec![
            ("/dashboard/profile", "My Profile"),
            ("/dashboard/my-salary", "My Salary"),
            ("/dashboard/my-leave", "My Leave"),
            ("/dashboard/messages", "Messages"),
        ],
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let links = move || session.role().map(links_for).unwrap_or_default();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"EMS"</div>
            <nav class="sidebar-nav">
                <A href="/dashboard" exact=true class="nav-link">
                    "Dashboard"
                </A>
                <For
                    each=links
                    key=|(href, _)| *href
                    children=|(href, label)| {
                        view! {
                            <A href=href class="nav-link">
                                {label}
                            </A>
                        }
                    }
                />
            </nav>
        </aside>
    }
}
