use crate::analytics::FaqTotals;
use crate::services::{FaqRecord, FaqStatus};
use std::fmt::Write;

pub fn render_faq_list(records: &[&FaqRecord]) -> String {
    if records.is_empty() {
        return "<p class=\"empty\">No items match your current filters.</p>".to_string();
    }

    let mut html = String::new();
    html.push_str("<div class=\"faq_list\">");
    for record in records {
        writeln!(
            html,
            "<div class=\"faq_card\" id=\"faq-{}\"><p class=\"question\">{}</p>",
            record.id, record.question
        )
        .ok();
        for tag in &record.tags {
            writeln!(html, "<span class=\"badge\">{tag}</span>").ok();
        }
        writeln!(
            html,
            "<p class=\"answer\">{}</p><span class=\"meta\">{} views &middot; {} helpful</span>",
            record.answer, record.views, record.helpful
        )
        .ok();
        if record.status != FaqStatus::Published {
            html.push_str("<button class=\"action\">Publish</button>");
        }
        if record.status != FaqStatus::Draft {
            html.push_str("<button class=\"action\">Move to Draft</button>");
        }
        if record.status != FaqStatus::Pending {
            html.push_str("<button class=\"action\">Mark Pending</button>");
        }
        html.push_str("<button class=\"action danger\">Delete</button></div>");
    }
    html.push_str("</div>");
    html
}

pub fn render_stat_cards(totals: &FaqTotals) -> String {
    let mut html = String::new();
    writeln!(
        html,
        "<div class=\"stat_cards\"><div class=\"stat\">Total Questions <strong>{}</strong></div>",
        totals.total
    )
    .ok();
    writeln!(
        html,
        "<div class=\"stat\">Total Views <strong>{}</strong></div>",
        totals.views
    )
    .ok();
    writeln!(
        html,
        "<div class=\"stat\">Helpful Rating <strong>{}%</strong></div></div>",
        totals.helpful_rate
    )
    .ok();
    html
}
