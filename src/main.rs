use clap::Parser;
use venue_access::adapters::places::{read_place_file, redact_api_key};
use venue_access::config::{Command, FontAction, LookupArgs};
use venue_access::core::presentation::{card_text, map_markers, narration_text, NARRATION_LANGUAGE};
use venue_access::core::PlaceSource;
use venue_access::utils::error::ErrorSeverity;
use venue_access::utils::{logger, validation::Validate};
use venue_access::{
    AppConfig, CliConfig, Directory, DirectoryError, InferenceClient, LocalStorage, Preferences,
    Result, Venue,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting venue-access");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        fail(&e);
    }

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            AppConfig::from_file(path).unwrap_or_else(|e| fail(&e))
        }
        None => AppConfig::default(),
    };
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let result = match &cli.command {
        Command::Lookup(args) => run_lookup(&config, args).await,
        Command::Font { action } => run_font(&config, *action).await,
    };

    if let Err(e) = result {
        fail(&e);
    }

    Ok(())
}

async fn run_lookup(config: &AppConfig, args: &LookupArgs) -> Result<()> {
    let inference =
        InferenceClient::with_settings(config.openai_client(), config.inference_settings());
    let mut directory = Directory::new(inference);

    let mut places = Vec::new();
    if !args.place_ids.is_empty() {
        let source = config.places_client();
        for place_id in &args.place_ids {
            places.push(source.place_details(place_id).await?);
        }
    }
    for path in &args.place_files {
        places.push(read_place_file(path).await?);
    }

    for place in places {
        match directory.select_place(place).await {
            Ok(_) => {}
            Err(e @ DirectoryError::DuplicateVenueError { .. }) => {
                tracing::warn!("{}", e.user_friendly_message())
            }
            Err(e) => return Err(e),
        }
    }

    let matches = directory.search(&args.query);
    tracing::info!(
        "{} of {} venue(s) match '{}'",
        matches.len(),
        directory.venues().len(),
        args.query
    );

    let venues: Vec<Venue> = matches
        .into_iter()
        .map(|venue| {
            let mut venue = venue.clone();
            if !args.reveal_keys {
                venue.image_url = redact_api_key(&venue.image_url);
            }
            venue
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&venues)?);
    } else {
        let center = directory.map_center();
        println!("Map center: {}, {}", center.lat, center.lng);
        for (venue, location) in map_markers(&venues) {
            println!("  marker: {} @ {}, {}", venue.name, location.lat, location.lng);
        }
        for venue in &venues {
            println!();
            println!("{}", card_text(venue));
        }
    }

    if args.narrate {
        for venue in &venues {
            println!();
            println!("[{}]", NARRATION_LANGUAGE);
            println!("{}", narration_text(venue));
        }
    }

    Ok(())
}

async fn run_font(config: &AppConfig, action: FontAction) -> Result<()> {
    let storage = LocalStorage::new(config.preferences_dir());
    let mut preferences = Preferences::load(storage).await?;

    let scale = match action {
        FontAction::Show => preferences.font_scale(),
        FontAction::Increase => preferences.increase_font_scale().await?,
        FontAction::Reset => preferences.reset_font_scale().await?,
    };

    println!("Font scale: {}em", scale.value());
    Ok(())
}

fn fail(e: &DirectoryError) -> ! {
    tracing::error!(
        "venue-access failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
