use crate::store::AppStore;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Both fields must be filled in; there is no credential check beyond that.
fn check_sign_in(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Please enter your email");
    }
    if password.trim().is_empty() {
        return Err("Please enter your password");
    }
    Ok(())
}

#[component]
pub fn LoginPage(store: AppStore) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<&'static str>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if let Err(message) = check_sign_in(&email.get_untracked(), &password.get_untracked()) {
            set_error_message.set(Some(message));
            return;
        }
        set_error_message.set(None);
        spawn_local(async move { store.login().await });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Navkar"</h1>
                <h2>"Admin Panel"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@navkar.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary">"Sign In"</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::check_sign_in;

    #[test]
    fn test_blank_fields_are_rejected() {
        assert_eq!(check_sign_in("", "secret"), Err("Please enter your email"));
        assert_eq!(check_sign_in("admin@navkar.com", "   "), Err("Please enter your password"));
        assert_eq!(check_sign_in("admin@navkar.com", "secret"), Ok(()));
    }
}
