//! HTML rendering.
//!
//! Pages are assembled from plain string fragments. Every piece of dynamic
//! text passes through [`escape_html`] before it is embedded.
//!
//! The element ids and label texts below form the page contract that the UI
//! tests select on: `#accounts-table-body`, `#from-account`, `#to-account`,
//! `#amount`, `#transfer-button`, `#transfer-success`, `#transfer-error`,
//! `#transfer-history` and `#login-error`.

use crate::domain::account::Account;
use crate::domain::transfer::TransferRecord;
use crate::domain::user::User;
use crate::domain::value_objects::AccountId;

/// Outcome message shown above the transfer form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    /// Rendered as `#transfer-success`.
    Success(String),
    /// Rendered as `#transfer-error`.
    Error(String),
}

/// Escapes the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Wraps a body fragment in a complete document.
#[must_use]
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\"/>\n  \
         <title>{}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape_html(title)
    )
}

/// The login form, optionally with an error message.
#[must_use]
pub fn login_page(error: Option<&str>, username: &str) -> String {
    let error_html = error.map_or_else(String::new, |message| {
        format!(
            "  <p id=\"login-error\" role=\"alert\">{}</p>\n",
            escape_html(message)
        )
    });
    let body = format!(
        "<main>\n  <h1>MiniBank</h1>\n{error_html}  <form id=\"login-form\" method=\"post\" action=\"/login\">\n    \
         <label for=\"username\">Username:</label>\n    \
         <input id=\"username\" name=\"username\" type=\"text\" value=\"{}\" autocomplete=\"username\"/>\n    \
         <label for=\"password\">Password:</label>\n    \
         <input id=\"password\" name=\"password\" type=\"password\" autocomplete=\"current-password\"/>\n    \
         <button id=\"login-button\" type=\"submit\">Login</button>\n  </form>\n</main>",
        escape_html(username)
    );
    layout("MiniBank - Login", &body)
}

/// Header with the logged-in user, navigation and the logout button.
#[must_use]
pub fn header(user: &User) -> String {
    format!(
        "<header>\n  <p id=\"user-info\">Logged in as: <strong id=\"user-name\">{}</strong></p>\n  \
         <nav>\n    <a href=\"/accounts\">Accounts</a>\n    <a href=\"/transfer\">Transfer</a>\n    \
         <a href=\"/transfers\">Transfers</a>\n  </nav>\n  \
         <form method=\"post\" action=\"/logout\">\n    <button id=\"logout-button\" type=\"submit\">Logout</button>\n  \
         </form>\n</header>",
        escape_html(&user.name)
    )
}

/// The accounts table.
#[must_use]
pub fn accounts_section(accounts: &[Account]) -> String {
    let rows: String = accounts
        .iter()
        .map(|account| {
            format!(
                "      <tr data-account-id=\"{id}\">\n        <td>{id}</td>\n        <td>{}</td>\n        \
                 <td class=\"balance\">{}</td>\n      </tr>\n",
                escape_html(account.account_type.as_str()),
                escape_html(&account.balance.to_plain_string()),
                id = account.id,
            )
        })
        .collect();
    format!(
        "<section id=\"accounts\">\n  <h2>Accounts</h2>\n  <table id=\"accounts-table\">\n    \
         <thead>\n      <tr><th>ID</th><th>Type</th><th>Balance</th></tr>\n    </thead>\n    \
         <tbody id=\"accounts-table-body\">\n{rows}    </tbody>\n  </table>\n</section>"
    )
}

fn account_options(accounts: &[Account], selected: Option<AccountId>) -> String {
    accounts
        .iter()
        .map(|account| {
            let marker = if Some(account.id) == selected {
                " selected"
            } else {
                ""
            };
            format!(
                "        <option value=\"{id}\"{marker}>{id} ({})</option>\n",
                escape_html(account.account_type.as_str()),
                id = account.id,
            )
        })
        .collect()
}

fn flash_html(flash: Option<&Flash>) -> String {
    match flash {
        Some(Flash::Success(message)) => format!(
            "  <p id=\"transfer-success\" role=\"status\">{}</p>\n",
            escape_html(message)
        ),
        Some(Flash::Error(message)) => format!(
            "  <p id=\"transfer-error\" role=\"alert\">{}</p>\n",
            escape_html(message)
        ),
        None => String::new(),
    }
}

/// The transfer form with an optional outcome message.
#[must_use]
pub fn transfer_section(accounts: &[Account], flash: Option<&Flash>) -> String {
    // The destination preselects the second account so the untouched form
    // does not describe a same-account transfer.
    let from_options = account_options(accounts, None);
    let to_options = account_options(accounts, accounts.get(1).map(|account| account.id));
    format!(
        "<section id=\"transfer\">\n  <h2>Transfer</h2>\n{}  \
         <form id=\"transfer-form\" method=\"post\" action=\"/transfer\">\n    \
         <label for=\"from-account\">From Account:</label>\n    \
         <select id=\"from-account\" name=\"fromAccountId\">\n{from_options}    </select>\n    \
         <label for=\"to-account\">To Account:</label>\n    \
         <select id=\"to-account\" name=\"toAccountId\">\n{to_options}    </select>\n    \
         <label for=\"amount\">Amount:</label>\n    \
         <input id=\"amount\" name=\"amount\" type=\"text\" inputmode=\"decimal\"/>\n    \
         <button id=\"transfer-button\" type=\"submit\">Submit Transfer</button>\n  </form>\n</section>",
        flash_html(flash)
    )
}

/// The transfer history list, newest first.
#[must_use]
pub fn history_section(history: &[TransferRecord]) -> String {
    let items: String = history
        .iter()
        .map(|record| format!("    <li>{}</li>\n", escape_html(&record.summary())))
        .collect();
    format!(
        "<section id=\"transfers\">\n  <h2>Transfers</h2>\n  <ul id=\"transfer-history\">\n{items}  </ul>\n</section>"
    )
}

/// Page for an authenticated user: header followed by the given sections.
#[must_use]
pub fn app_page(title: &str, user: &User, sections: &[String]) -> String {
    let body = format!("{}\n<main>\n{}\n</main>", header(user), sections.join("\n"));
    layout(title, &body)
}
