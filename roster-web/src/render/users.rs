//! User list and detail views

use roster_core::Fetched;
use roster_core::domain::user::User;
use roster_core::i18n::Messages;

use super::{alert, encode_segment, escape};

/// Href of a user's detail page
pub fn user_href(user: &User) -> String {
    format!("/users/{}", encode_segment(&user.id))
}

/// The data-dependent region of the user list page
pub fn user_list(fetched: &Fetched<Vec<User>>, messages: &Messages) -> String {
    let users = match fetched {
        Fetched::Success { data } => data,
        Fetched::NotFound { message } | Fetched::Error { message } => return alert(message),
    };

    if users.is_empty() {
        return format!("<p>{}</p>", escape(messages.no_users_found));
    }

    let cards: String = users.iter().map(|user| user_card(user, messages)).collect();
    format!(r#"<div class="cards">{cards}</div>"#)
}

fn user_card(user: &User, messages: &Messages) -> String {
    format!(
        r#"<a class="card" href="{href}" aria-label="{label}"><p class="name">{name}</p><p class="muted">{email}</p></a>"#,
        href = escape(&user_href(user)),
        label = escape(&messages.profile_link_label(&user.name)),
        name = escape(&user.name),
        email = escape(&user.email),
    )
}

/// The data-dependent region of the user detail page
pub fn user_detail(fetched: &Fetched<User>, messages: &Messages) -> String {
    match fetched {
        Fetched::Success { data: user } => format!(
            r#"<section class="detail"><h2 class="name">{name}</h2><p>{id_label}: {id}</p><p>{email_label}: {email}</p></section>"#,
            name = escape(&user.name),
            id_label = escape(messages.user_id_label),
            id = escape(&user.id),
            email_label = escape(messages.email_label),
            email = escape(&user.email),
        ),
        Fetched::NotFound { message } => {
            format!(r#"<section class="not-found">{}</section>"#, alert(message))
        }
        Fetched::Error { message } => alert(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::i18n::Locale;

    fn user(id: &str, name: &str, email: &str) -> User {
        User {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    fn ja() -> &'static Messages {
        Locale::Ja.messages()
    }

    #[test]
    fn test_single_user_card() {
        let html = user_list(&Fetched::success(vec![user("1", "Alice", "a@x.com")]), ja());
        assert_eq!(
            html,
            concat!(
                r#"<div class="cards"><a class="card" href="/users/1" aria-label="Aliceのプロフィールへ">"#,
                r#"<p class="name">Alice</p><p class="muted">a@x.com</p></a></div>"#,
            )
        );
    }

    #[test]
    fn test_one_card_per_user() {
        let users = vec![
            user("1", "Alice", "a@x.com"),
            user("2", "Bob", "b@x.com"),
            user("3", "Carol", "c@x.com"),
        ];
        let html = user_list(&Fetched::success(users), ja());
        assert_eq!(html.matches(r#"class="card""#).count(), 3);
        for id in ["1", "2", "3"] {
            assert!(html.contains(&format!(r#"href="/users/{id}""#)));
        }
    }

    #[test]
    fn test_empty_list() {
        let html = user_list(&Fetched::success(vec![]), ja());
        assert_eq!(html, "<p>ユーザーが見つかりませんでした。</p>");
        assert!(!html.contains("card"));
    }

    #[test]
    fn test_list_error() {
        let html = user_list(&Fetched::error("ユーザーの取得に失敗しました。"), ja());
        assert_eq!(
            html,
            r#"<p class="alert" role="alert">ユーザーの取得に失敗しました。</p>"#
        );
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = user_list(
            &Fetched::success(vec![user("x y", "<b>Mallory</b>", "m@x.com\"")]),
            ja(),
        );
        assert!(html.contains(r#"href="/users/x%20y""#));
        assert!(html.contains("&lt;b&gt;Mallory&lt;/b&gt;"));
        assert!(html.contains("m@x.com&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_detail() {
        let html = user_detail(&Fetched::success(user("1", "Alice", "a@x.com")), ja());
        assert!(html.contains(r#"<h2 class="name">Alice</h2>"#));
        assert!(html.contains("<p>ユーザーID: 1</p>"));
        assert!(html.contains("<p>メールアドレス: a@x.com</p>"));
    }

    #[test]
    fn test_detail_not_found() {
        let html = user_detail(&Fetched::not_found("ユーザーが存在しません。"), ja());
        assert!(html.contains(r#"class="not-found""#));
        assert!(html.contains("ユーザーが存在しません。"));
        assert!(!html.contains("ユーザーID"));
    }

    #[test]
    fn test_detail_error() {
        let html = user_detail(&Fetched::error("ユーザーの取得に失敗しました。"), ja());
        assert_eq!(html, alert("ユーザーの取得に失敗しました。"));
    }
}
