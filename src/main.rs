use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use purplex_faq_rust::controller::admin::{AdminCommand, AdminFaqController, AdminView};
use purplex_faq_rust::faq_ops::FaqOptions;
use purplex_faq_rust::help::HelpCenter;
use purplex_faq_rust::services::local::{LocalFileStore, LocalStoreConfig};
use purplex_faq_rust::services::FaqStatus;
use purplex_faq_rust::templates::faq_list::{render_faq_list, render_stat_cards};

fn main() {
    dotenv().ok();
    init_tracing();

    let store = LocalFileStore::new(&LocalStoreConfig::from_env());
    let mut admin = AdminFaqController::new(store.clone());

    let command = AdminCommand::Create(FaqOptions {
        question: "Do you offer sibling discounts?".into(),
        answer: "Yes, 10% off tuition for each additional child.".into(),
        tags: "billing, enrollment".into(),
        status: FaqStatus::Draft,
    });
    if let Err(error) = admin.apply(command) {
        eprintln!("create -> {error}");
    }

    admin.set_view(AdminView::Draft);
    println!("{}", render_faq_list(&admin.filtered()));

    let first_draft = admin.filtered().first().map(|record| record.id);
    if let Some(id) = first_draft {
        if let Err(error) = admin.apply(AdminCommand::Move {
            id,
            to: FaqStatus::Published,
        }) {
            eprintln!("move -> {error}");
        }
    }

    println!("{}", render_stat_cards(&admin.totals()));

    for record in admin.top_questions() {
        println!("top: {} ({} views)", record.question, record.views);
    }

    let help = HelpCenter::new(store);
    if let Err(error) = help.submit_question("What are your opening hours?") {
        eprintln!("submit -> {error}");
    }
    for record in help.published("discount") {
        println!("help: {} ({} views)", record.question, record.views);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
