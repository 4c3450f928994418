// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use botstats::cli::{AskArgs, RecordArgs, ShowArgs};
use botstats::config::{DataConfig, Settings};
use botstats::error::Result;
use botstats::generator::{now_timestamp, random_daily_stat, random_session, today};
use botstats::history::{HistoryStore, SessionRecord};
use botstats::llm::{self, CompletionRequest};
use botstats::stats::{DailyStatWriter, StatsSnapshot};
use botstats::utils;

/// Append one random conversation; write failures propagate
pub(super) fn run_simulate(data: &DataConfig) -> Result<()> {
    let store = HistoryStore::new(&data.history_file);
    let session = random_session(&mut rand::rng(), now_timestamp());
    let intent = session.primary_intent;
    let satisfaction = session.user_satisfaction;

    let doc = store.append(session)?;
    tracing::info!(sessions = doc.len(), average = doc.average_satisfaction, "history updated");

    println!(
        "Simulated conversation: {} - Satisfaction: {}/5",
        intent, satisfaction
    );
    Ok(())
}

/// Write one random daily stat; a failed write exits with status 1
pub(super) fn run_generate_stats(data: &DataConfig) {
    let date = today();
    let stat = random_daily_stat(&mut rand::rng(), date.as_str());
    let writer = DailyStatWriter::new(&data.daily_stats_file);

    match writer.write(&stat) {
        Ok(()) => println!("Successfully generated bot stats for {}: {}", date, stat),
        Err(e) => {
            tracing::error!(path = %writer.path().display(), error = %e, "daily stat write failed");
            println!("Error generating stats: {}", e);
            std::process::exit(1);
        }
    }
}

pub(super) fn run_record(args: RecordArgs, data: &DataConfig) -> Result<()> {
    let session = SessionRecord {
        timestamp: now_timestamp(),
        total_messages: args.messages,
        primary_intent: args.intent,
        avg_response_time_ms: args.response_time,
        user_satisfaction: args.satisfaction,
        resolution_status: args.status,
    };
    session.validate()?;

    let doc = HistoryStore::new(&data.history_file).append(session)?;
    println!(
        "Recorded conversation: {} sessions, average satisfaction {:.2}/5",
        doc.len(),
        doc.average_satisfaction
    );
    Ok(())
}

pub(super) fn run_show(args: ShowArgs, data: &DataConfig) -> Result<()> {
    let path = match args.file {
        Some(file) => file,
        None if args.daily => data.daily_stats_file.clone(),
        None => data.history_file.clone(),
    };

    match StatsSnapshot::read(&path)? {
        Some(snapshot) => println!("{}", snapshot.summary_line()),
        None => println!("No stats at {}", path.display()),
    }
    Ok(())
}

pub(super) async fn run_ask(args: AskArgs, settings: &Settings) -> Result<()> {
    let provider = match llm::provider_from_settings(settings) {
        Ok(provider) => provider,
        Err(e) => {
            println!("{}", utils::format_error(&e));
            return Ok(());
        }
    };

    let mut request = CompletionRequest::from_config(args.prompt.as_str(), &settings.gemini);
    if let Some(model) = args.model {
        request = request.with_model(model);
    }
    if let Some(temperature) = args.temperature {
        request = request.with_temperature(temperature);
    }
    if let Some(max_tokens) = args.max_tokens {
        request = request.with_max_tokens(max_tokens);
    }

    println!("Question: {}\n", args.prompt);
    println!("{}", llm::answer(&provider, request).await);
    Ok(())
}

pub(super) fn run_check_key(settings: &Settings) {
    println!("{}", llm::key_status(settings));
}
