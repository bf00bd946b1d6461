use clap::{Parser, Subcommand};

use agricola_tutor_engine::{
    resolve, CardFragment, FileSource, Locale, TutorEngine,
};

#[derive(Parser)]
#[command(name = "tutor-cli")]
#[command(about = "Agricola Tutor Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset path
    #[arg(short, long, default_value = "cards.json")]
    cards: String,

    /// Display language (en, zh, jp; host tags like zh-CN are accepted)
    #[arg(short, long, default_value = "en")]
    lang: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Search cards by numbering or name substring
    Search {
        /// Search query
        query: String,

        /// Maximum results
        #[arg(short, long, default_value = "10")]
        max_results: usize,
    },

    /// Show one card, matched the way the overlay matches page elements
    Show {
        /// Numbering code or display name
        card: String,
    },

    /// Recommend random rated cards
    Recommend {
        /// Number of cards
        #[arg(short, long, default_value = "3")]
        count: usize,
    },

    /// Dataset statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let locale = Locale::from_tag(&cli.lang);

    let source = FileSource::new(&cli.cards);
    let engine = TutorEngine::load(&source).await?;

    match cli.command {
        Commands::Search { query, max_results } => {
            let views = engine.search_views(&query, max_results, locale);

            if views.is_empty() {
                println!("No cards match '{}'", query);
                return Ok(());
            }

            println!("🔍 {} result(s) for '{}':", views.len(), query);
            for view in views {
                print_view(&view);
            }
        }

        Commands::Show { card } => {
            // Try the input both as a numbering code and as a name, the same
            // priority order the overlay uses for page fragments
            let fragment = CardFragment {
                numbering: Some(card.clone()),
                name: Some(card.clone()),
            };

            match engine.lookup(&fragment, locale) {
                Some(view) => print_view(&view),
                None => println!("No card matches '{}'", card),
            }
        }

        Commands::Recommend { count } => {
            println!("🎲 Recommended cards:");
            for card in engine.recommend(count) {
                println!(
                    "   {} {} ({})",
                    card.id,
                    resolve::card_name(card, locale),
                    resolve::primary_accent_color(card)
                );
            }
        }

        Commands::Stats => {
            let stats = engine.stats();

            println!("📊 Dataset Statistics:");
            println!("   Cards: {}", stats.cards);
            println!("   Rated cards: {}", stats.rated_cards);
            println!("   Loaded at: {}", stats.loaded_at.format("%Y-%m-%d %H:%M:%S"));
        }
    }

    Ok(())
}

fn print_view(view: &agricola_tutor_engine::CardView) {
    println!("\n[{}] {} (accent {})", view.id, view.name, view.accent_color);

    if !view.effect.is_empty() {
        println!("   {}", view.effect);
    }

    for rating in &view.ratings {
        let verdict = if !rating.tier.is_empty() {
            rating.tier.clone()
        } else if let Some(score) = rating.score {
            format!("{:.1}", score)
        } else {
            "-".to_string()
        };

        let hidden = if rating.shown_by_default { "" } else { " (collapsed)" };
        println!("   {} [{}] {}{}", rating.author_label, verdict, rating.color, hidden);

        if !rating.comment.is_empty() {
            println!("      {}", rating.comment);
        }
    }

    for stat in &view.stats {
        match &stat.color {
            Some(color) => println!("   {}: {} ({})", stat.label, stat.formatted, color),
            None => println!("   {}: {}", stat.label, stat.formatted),
        }
    }
}
