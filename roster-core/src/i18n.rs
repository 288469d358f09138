//! Localized end-user messages
//!
//! Every string a visitor can read lives here. Technical error detail never
//! does; that goes to the logs.

use std::str::FromStr;

/// UI language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    /// Value for the `lang` attribute of the HTML root
    pub fn lang(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Ja => &JA,
            Locale::En => &EN,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ja" | "ja-jp" => Ok(Locale::Ja),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lang())
    }
}

/// Message table for one locale
#[derive(Debug)]
pub struct Messages {
    pub site_title: &'static str,
    pub home_heading: &'static str,
    pub user_list_heading: &'static str,
    pub user_list_link: &'static str,
    pub user_detail_heading: &'static str,
    pub back_to_list: &'static str,
    pub user_id_label: &'static str,
    pub email_label: &'static str,
    pub loading: &'static str,
    pub fetch_users_failed: &'static str,
    pub fetch_user_failed: &'static str,
    pub user_not_found: &'static str,
    pub no_users_found: &'static str,
    pub page_not_found: &'static str,
    pub back_to_home: &'static str,
    profile_link_template: &'static str,
}

impl Messages {
    /// Accessible label for the link to a user's detail page
    pub fn profile_link_label(&self, name: &str) -> String {
        self.profile_link_template.replace("{name}", name)
    }
}

static JA: Messages = Messages {
    site_title: "Roster",
    home_heading: "Home",
    user_list_heading: "ユーザー一覧",
    user_list_link: "ユーザー一覧",
    user_detail_heading: "ユーザー詳細",
    back_to_list: "ユーザー一覧へ戻る",
    user_id_label: "ユーザーID",
    email_label: "メールアドレス",
    loading: "読み込み中",
    fetch_users_failed: "ユーザーの取得に失敗しました。",
    fetch_user_failed: "ユーザーの取得に失敗しました。",
    user_not_found: "ユーザーが存在しません。",
    no_users_found: "ユーザーが見つかりませんでした。",
    page_not_found: "ページが見つかりません。",
    back_to_home: "ホームへ戻る",
    profile_link_template: "{name}のプロフィールへ",
};

static EN: Messages = Messages {
    site_title: "Roster",
    home_heading: "Home",
    user_list_heading: "Users",
    user_list_link: "Users",
    user_detail_heading: "User details",
    back_to_list: "Back to users",
    user_id_label: "User ID",
    email_label: "Email",
    loading: "Loading",
    fetch_users_failed: "Failed to load users.",
    fetch_user_failed: "Failed to load the user.",
    user_not_found: "The user does not exist.",
    no_users_found: "No users were found.",
    page_not_found: "Page not found.",
    back_to_home: "Back to home",
    profile_link_template: "Go to {name}'s profile",
};
