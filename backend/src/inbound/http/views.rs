//! Server-rendered HTML pages.
//!
//! Every page goes through [`layout`], which draws the navigation bar for
//! the current user and drains the flash queue handed to it. All
//! user-supplied text passes through [`escape`].

use std::fmt::Write;

use super::flash::Flash;
use crate::domain::{Item, ItemId, ItemInput, Username};

/// Escape text for use in HTML element content and quoted attributes.
///
/// # Examples
/// ```
/// use stockroom::inbound::http::views::escape;
///
/// assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
/// ```
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap `body` in the shared page chrome.
pub fn layout(title: &str, user: Option<&Username>, flashes: &[Flash], body: &str) -> String {
    let nav = match user {
        Some(username) => format!(
            r#"<span class="user">Signed in as {}</span> <a href="/">Inventory</a> <a href="/add_item">Add item</a> <a href="/logout">Log out</a>"#,
            escape(username.as_ref())
        ),
        None => r#"<a href="/login">Log in</a> <a href="/register">Register</a>"#.to_owned(),
    };
    let mut notices = String::new();
    for flash in flashes {
        let _ = write!(
            notices,
            r#"<li class="flash {}">{}</li>"#,
            flash.level.as_str(),
            escape(&flash.message)
        );
    }
    if !notices.is_empty() {
        notices = format!(r#"<ul class="flashes">{notices}</ul>"#);
    }
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title} | Stockroom</title></head>
<body>
<nav>{nav}</nav>
{notices}
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Price text shared by the listing and the edit form: the exact stored
/// value, padded to at least two decimal places.
///
/// # Examples
/// ```
/// use stockroom::inbound::http::views::format_price;
///
/// assert_eq!(format_price(0.5), "0.50");
/// assert_eq!(format_price(0.125), "0.125");
/// ```
#[must_use]
pub fn format_price(price: f64) -> String {
    let mut text = price.to_string();
    let decimals = match text.find('.') {
        Some(dot) => text.len() - dot - 1,
        None => {
            text.push('.');
            0
        }
    };
    for _ in decimals..2 {
        text.push('0');
    }
    text
}

pub fn landing() -> String {
    r#"<p>Track your stock. <a href="/register">Create an account</a> or <a href="/login">log in</a> to get started.</p>"#.to_owned()
}

/// Inventory table for the signed-in user.
pub fn inventory(items: &[Item]) -> String {
    if items.is_empty() {
        return r#"<p class="empty">No items yet. <a href="/add_item">Add one</a>.</p>"#.to_owned();
    }
    let mut rows = String::new();
    for item in items {
        let _ = write!(
            rows,
            r#"<tr><td>{name}</td><td>{sku}</td><td>{category}</td><td>{quantity}</td><td>{price}</td><td>{supplier}</td><td>{location}</td><td><a href="/edit_item/{id}">Edit</a> <form method="post" action="/delete_item/{id}" class="inline"><button type="submit">Delete</button></form></td></tr>"#,
            name = escape(&item.name),
            sku = escape(&item.sku),
            category = escape(&item.category),
            quantity = item.quantity,
            price = format_price(item.price),
            supplier = escape(&item.supplier),
            location = escape(&item.location),
            id = item.id,
        );
    }
    format!(
        r#"<table class="inventory">
<thead><tr><th>Name</th><th>SKU</th><th>Category</th><th>Quantity</th><th>Price</th><th>Supplier</th><th>Location</th><th></th></tr></thead>
<tbody>{rows}</tbody>
</table>"#
    )
}

pub fn register_form() -> String {
    credentials_form("/register", "Register")
}

pub fn login_form() -> String {
    credentials_form("/login", "Log in")
}

fn credentials_form(action: &str, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
<label>Username <input name="username" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">{submit}</button>
</form>"#
    )
}

/// Add form when `id` is `None`, edit form otherwise.
pub fn item_form(id: Option<&ItemId>, values: &ItemInput) -> String {
    let (action, submit) = match id {
        Some(id) => (format!("/edit_item/{id}"), "Save changes"),
        None => ("/add_item".to_owned(), "Add item"),
    };
    let fields = [
        ("name", "Name", values.name.as_str()),
        ("sku", "SKU", values.sku.as_str()),
        ("category", "Category", values.category.as_str()),
        ("quantity", "Quantity", values.quantity.as_str()),
        ("price", "Price", values.price.as_str()),
        ("supplier", "Supplier", values.supplier.as_str()),
        ("location", "Location", values.location.as_str()),
    ];
    let mut inputs = String::new();
    for (name, label, value) in fields {
        let _ = writeln!(
            inputs,
            r#"<label>{label} <input name="{name}" value="{}"></label>"#,
            escape(value)
        );
    }
    format!(
        r#"<form method="post" action="{action}">
{inputs}<button type="submit">{submit}</button>
</form>"#
    )
}

/// Body for an error page; `trace_id` lets operators find the log lines.
pub fn error_page(message: &str, trace_id: Option<&str>) -> String {
    let reference = trace_id
        .map(|id| format!(r#"<p class="trace">Reference: <code>{}</code></p>"#, escape(id)))
        .unwrap_or_default();
    format!(
        r#"<p>{}</p>
{reference}<p><a href="/">Back to inventory</a></p>"#,
        escape(message)
    )
}
