// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Host page rendering.
//!
//! Turns a [`Document`] into the HTML page that owns the slots. Elements the
//! document does not hold are left out, and a usage box carrying an inline
//! message shows only that message.

use crate::render::target::{Bar, Document, Element, Slot};
use std::fmt::Write;

const STYLE: &str = "\
body{font-family:sans-serif;margin:2rem;color:#222}\
#user-avatar{width:64px;height:64px;border-radius:50%}\
.bars{display:flex;align-items:flex-end;gap:4px;height:160px;border-bottom:1px solid #ccc}\
.bar{flex:1;background:#5865f2;position:relative;min-width:8px}\
.bar-label{position:absolute;top:100%;font-size:10px}\
.error{color:#b00020}";

/// Render the full host page.
pub fn render_page(doc: &Document, login_url: &str) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<!doctype html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>VC Dashboard</title>\n");
    let _ = writeln!(out, "<style>{STYLE}</style>");
    out.push_str("</head>\n<body>\n");

    out.push_str("<section id=\"auth\">\n");
    if let Some(el) = doc.slot(Slot::UserStatus) {
        let _ = writeln!(
            out,
            "<p id=\"user-status\"{}>{}</p>",
            display_attr(el),
            escape(el.text.as_deref().unwrap_or(""))
        );
    }
    for id in Slot::CallToAction.element_ids() {
        if let Some(el) = doc.element(id) {
            let _ = writeln!(
                out,
                "<div id=\"{id}\"{}><a href=\"{}\">Log in with Discord</a></div>",
                display_attr(el),
                escape(login_url)
            );
        }
    }
    if let Some(el) = doc.slot(Slot::UserBox) {
        let _ = writeln!(out, "<div id=\"user-box\"{}>", display_attr(el));
        if let Some(avatar) = doc.slot(Slot::UserAvatar) {
            let _ = writeln!(
                out,
                "<img id=\"user-avatar\" src=\"{}\" alt=\"{}\">",
                escape(avatar.src.as_deref().unwrap_or("")),
                escape(avatar.alt.as_deref().unwrap_or(""))
            );
        }
        text_element(&mut out, doc, Slot::UserName, "strong");
        text_element(&mut out, doc, Slot::UserId, "span");
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");

    if let Some(usage) = doc.slot(Slot::UsageBox) {
        let _ = writeln!(out, "<section id=\"usage-box\"{}>", display_attr(usage));
        match usage.message.as_deref() {
            Some(message) => {
                let _ = writeln!(out, "<p class=\"error\">{}</p>", escape(message));
            }
            None => {
                if doc.slot(Slot::UsageTotal).is_some() {
                    out.push_str("<p>Total ");
                    text_element(&mut out, doc, Slot::UsageTotal, "span");
                    out.push_str(" h</p>\n");
                }
                bar_chart(&mut out, doc, Slot::UsageDaily);
                bar_chart(&mut out, doc, Slot::UsageHourly);
            }
        }
        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn text_element(out: &mut String, doc: &Document, slot: Slot, tag: &str) {
    let Some(el) = doc.slot(slot) else {
        return;
    };
    let title = el
        .title
        .as_deref()
        .map(|t| format!(" title=\"{}\"", escape(t)))
        .unwrap_or_default();
    let _ = write!(
        out,
        "<{tag} id=\"{}\"{}{}>{}</{tag}>",
        slot.id(),
        title,
        display_attr(el),
        escape(el.text.as_deref().unwrap_or(""))
    );
    if tag != "span" {
        out.push('\n');
    }
}

fn bar_chart(out: &mut String, doc: &Document, slot: Slot) {
    let Some(el) = doc.slot(slot) else {
        return;
    };
    let _ = writeln!(out, "<div id=\"{}\" class=\"bars\"{}>", slot.id(), display_attr(el));
    for bar in &el.bars {
        bar_html(out, bar);
    }
    out.push_str("</div>\n");
}

fn bar_html(out: &mut String, bar: &Bar) {
    let _ = writeln!(
        out,
        "<div class=\"bar\" style=\"height:{}%\" title=\"{}\"><span class=\"bar-label\">{}</span></div>",
        format_percent(bar.height_pct),
        escape(&bar.tooltip),
        escape(&bar.label)
    );
}

fn display_attr(el: &Element) -> &'static str {
    match el.visible {
        Some(true) => " style=\"display:block\"",
        Some(false) => " style=\"display:none\"",
        None => "",
    }
}

/// Percentage with at most two decimals ("100", "33.33", "12.5").
pub fn format_percent(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Minimal HTML escaping for text and attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
