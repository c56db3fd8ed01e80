use leptos::*;

use super::navbar::Navbar;
use super::sidebar::Sidebar;

/// Chrome of the authenticated area: sidebar, top bar, page content.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="main-area">
                <Navbar/>
                <main class="content">{children()}</main>
            </div>
        </div>
    }
}
