use clap::{Arg, Command};
use std::env;
use tracing::info;

use crate::{AdventureGenerator, AdventureRequest, Mood};

/// CLI entry point for the sidequest tool
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("sidequest")
        .version("0.1.0")
        .about("Generate five spontaneous mini-adventure suggestions for a place and mood")
        .arg(
            Arg::new("location")
                .help("Where the adventures should happen (free-text place name)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("mood")
                .short('m')
                .long("mood")
                .value_name("MOOD")
                .help("One of: chill, funny, active, creative")
                .default_value("chill"),
        )
        .arg(
            Arg::new("time")
                .short('t')
                .long("time")
                .value_name("MINUTES")
                .help("Minutes available")
                .default_value("45"),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("BUDGET")
                .help("Spending range, e.g. 'Free' or '$5-10'")
                .default_value("Free"),
        )
        .arg(
            Arg::new("lat")
                .long("lat")
                .value_name("LATITUDE")
                .help("Latitude of the location")
                .default_value("0.0"),
        )
        .arg(
            Arg::new("lon")
                .long("lon")
                .value_name("LONGITUDE")
                .help("Longitude of the location")
                .default_value("0.0"),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .value_name("MODEL")
                .help("Chat-completion model to use"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Groq API key (or set GROQ_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Chat-completion base URL (or set GROQ_BASE_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .default_value("30"),
        )
        .get_matches();

    // Get API key from argument or environment
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("GROQ_API_KEY").ok())
        .ok_or("Groq API key is required. Set GROQ_API_KEY environment variable or use --api-key")?;

    let mood: Mood = matches.get_one::<String>("mood").unwrap().parse()?;
    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;
    let latitude: f64 = matches.get_one::<String>("lat").unwrap().parse()?;
    let longitude: f64 = matches.get_one::<String>("lon").unwrap().parse()?;

    let mut generator = AdventureGenerator::new(api_key)
        .with_timeout(std::time::Duration::from_secs(timeout_seconds));
    if let Some(model) = matches.get_one::<String>("model") {
        generator = generator.with_model(model.as_str());
    }
    if let Some(base_url) = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("GROQ_BASE_URL").ok())
    {
        generator = generator.with_base_url(base_url);
    }

    let request = AdventureRequest {
        mood,
        time_budget: matches.get_one::<String>("time").unwrap().clone(),
        budget: matches.get_one::<String>("budget").unwrap().clone(),
        location: matches.get_one::<String>("location").unwrap().clone(),
        latitude,
        longitude,
    };

    info!(mood = mood.as_str(), location = %request.location, "generating adventures");

    let result = generator.generate(&request).await;
    if result.is_fallback() {
        info!("generation degraded to the canned fallback set");
    }

    for (index, suggestion) in result.suggestions.iter().enumerate() {
        println!("\n{}. {} {}", index + 1, suggestion.emoji, suggestion.title);
        println!("   {}", suggestion.description);
        println!(
            "   Time: {}  Cost: {}  Where: {}",
            suggestion.estimated_time, suggestion.cost, suggestion.location
        );
        for tip in &suggestion.tips {
            println!("   - {tip}");
        }
    }

    Ok(())
}
