use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{SessionContext, SessionHandle, SessionState};

/// Wrapper for pages that require a signed-in user.
///
/// While the stored session is still being inspected a placeholder
/// renders instead of the page, so a signed-in user is not bounced to
/// the login screen during startup. An anonymous visitor is redirected
/// to `/login` carrying the path they wanted in `from`.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.with_value(SessionHandle::state);

    let navigate = use_navigate();
    let location = use_location();
    Effect::new(move || {
        if state.with(|s| matches!(s, SessionState::Anonymous)) {
            let from = location.pathname.get_untracked();
            navigate(&format!("/login?from={from}"), NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || state.with(SessionState::is_authenticated)
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
