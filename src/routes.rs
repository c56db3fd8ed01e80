//! Application root: session context, router and the route table.

use leptos::*;
use leptos_router::{Redirect, Route, Router, Routes};

use crate::auth::{RequireAuth, SessionCtx};
use crate::model::Role;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::departments::DepartmentsPage;
use crate::pages::employees::EmployeesPage;
use crate::pages::leaves::LeavesPage;
use crate::pages::login::LoginPage;
use crate::pages::messages::MessagesPage;
use crate::pages::messaging::MessagingPage;
use crate::pages::my_leave::MyLeavePage;
use crate::pages::my_salary::MySalaryPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::salaries::SalariesPage;

#[component]
pub fn App() -> impl IntoView {
    SessionCtx::provide();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path="/login" view=LoginPage/>
                <Route
                    path="/dashboard"
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path="/dashboard/departments"
                    view=|| {
                        view! {
                            <RequireAuth role=Role::Manager>
                                <DepartmentsPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path="/dashboard/employees"
                    view=|| {
                        view! {
                            <RequireAuth role=Role::Manager>
                                <EmployeesPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path="/dashboard/salaries"
                    view=|| {
                        view! {
                            <RequireAuth role=Role::Manager>
                                <SalariesPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path="/dashboard/leaves"
                    view=|| {
                        view! {
                            <RequireAuth role=Role::Manager>
                                <LeavesPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path="/dashboard/messaging"
                    view=|| {
                        view! {
                            <RequireAuth role=Role::Manager>
                                <MessagingPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path="/dashboard/analytics"
                    view=|| {
                        view! {
                            <RequireAuth role=Role::Manager>
                                <AnalyticsPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path="/dashboard/profile"
                    view=|| {
                        view! {
                            <RequireAuth role=Role::Employee>
                                <ProfilePage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path="/dashboard/my-salary"
                    view=|| {
                        view! {
                            <RequireAuth role=Role::Employee>
                                <MySalaryPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path="/dashboard/my-leave"
                    view=|| {
                        view! {
                            <RequireAuth role=Role::Employee>
                                <MyLeavePage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path="/dashboard/messages"
                    view=|| {
                        view! {
                            <RequireAuth role=Role::Employee>
                                <MessagesPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
