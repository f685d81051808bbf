mod cli;

use std::io;
use anyhow::Context;
use studyplan_lib::allocator::Allocator;
use studyplan_lib::config::{self, SummarySettings};
use studyplan_lib::plan::Plan;
use studyplan_lib::summary::{fallback_narratives, Narrative, OllamaSummarizer, SummaryService};
use studyplan_lib::{input, logging, render};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(cli::CliAction::Run(args)) => args,
        Ok(cli::CliAction::Help) => {
            cli::print_usage();
            return Ok(());
        }
        Ok(cli::CliAction::Version) => {
            println!("studyplan {}", cli::VERSION);
            return Ok(());
        }
        Err(e) => {
            cli::print_usage();
            return Err(e.into());
        }
    };

    logging::init_logging(args.verbose, args.log_json)?;
    tracing::info!(version = cli::VERSION, "studyplan starting");

    let mut config = config::load_config(args.config_path.as_deref());
    if let Some(enabled) = args.summary {
        config.summary.enabled = enabled;
    }

    let request = match &args.request_path {
        Some(path) => input::load_request(path).await?,
        None => {
            let mut stdin = io::stdin().lock();
            let mut stdout = io::stdout();
            input::collect_interactive(
                &mut stdin,
                &mut stdout,
                config.allocator.difficulty_scale,
                config.allocator.priority_scale,
            )?
        }
    };

    let allocator = Allocator::from_settings(&config.allocator);
    let topics = request.to_topics()?;
    let schedule = allocator.allocate(&topics, &request.budget())?;

    if args.json {
        let json = serde_json::to_string_pretty(&schedule).context("Failed to serialize schedule")?;
        println!("{}", json);
        return Ok(());
    }

    let (summary, day_notes) = narratives(&config.summary, &schedule.plan).await;
    let notes: Vec<String> = day_notes.into_iter().map(|n| n.text).collect();
    print!(
        "{}",
        render::render_plan(&schedule, allocator.calculator(), &notes, &summary.text)
    );
    Ok(())
}

/// Narrative text for the plan. Any backend trouble degrades to static text.
async fn narratives(settings: &SummarySettings, plan: &Plan) -> (Narrative, Vec<Narrative>) {
    let (fallback_summary, fallback_days) = fallback_narratives(plan);
    let fallback_days = if settings.per_day { fallback_days } else { Vec::new() };
    if !settings.enabled {
        return (fallback_summary, fallback_days);
    }

    let backend = match OllamaSummarizer::from_settings(settings) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::warn!(error = %e, "Summary backend unavailable, using fallback");
            return (fallback_summary, fallback_days);
        }
    };

    let service = SummaryService::from_settings(backend, settings);
    let summary = service.summarize_plan(plan).await;
    let days = if settings.per_day {
        service.day_notes(plan).await
    } else {
        Vec::new()
    };
    (summary, days)
}
