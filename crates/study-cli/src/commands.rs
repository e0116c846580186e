//! Command implementations.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use study_analysis::{AnalysisEngine, AnalysisInput};
use study_embeddings::MiniLmEmbedder;
use study_fetch::{CachedProvider, ContentCache, ContentProvider, DirContentProvider, HttpContentFetcher};
use study_source::{load_questions, load_topics};

use crate::cli::{AnalyzeArgs, Cli, Command, FetchArgs};
use crate::config::AppConfig;
use crate::render;

/// Initialise tracing. `RUST_LOG` wins over the flag when set.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Analyze(args) => analyze(args, config).await,
        Command::Fetch(args) => fetch(args, config).await,
    }
}

async fn analyze(args: AnalyzeArgs, mut config: AppConfig) -> anyhow::Result<()> {
    if let Some(t) = args.display_threshold {
        config.analysis.graph.display_threshold = t;
    }
    if let Some(t) = args.cluster_threshold {
        config.analysis.graph.cluster_threshold = t;
    }

    let topics = load_topics(&args.syllabus)?;
    let questions = match &args.questions {
        Some(path) => load_questions(path)?,
        None => Vec::new(),
    };

    let provider = build_provider(args.content_dir.as_deref(), &config)?;
    let mut content = HashMap::new();
    for topic in &topics {
        if let Some(text) = provider.fetch(topic).await? {
            content.insert(topic.clone(), text);
        }
    }

    info!("Loading embedding model");
    let embedder =
        MiniLmEmbedder::load_default().context("failed to load the embedding model")?;
    let engine = AnalysisEngine::new(Arc::new(embedder), config.analysis);

    let report = engine.run(&AnalysisInput {
        topics,
        questions,
        content,
    })?;

    if let Some(path) = &args.graph_out {
        let export = render::graph_export(&report);
        fs::write(path, serde_json::to_string_pretty(&export)?)
            .with_context(|| format!("failed to write graph export to {}", path.display()))?;
        info!(path = %path.display(), "Wrote graph export");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::study_table(&report));
    }
    Ok(())
}

async fn fetch(args: FetchArgs, config: AppConfig) -> anyhow::Result<()> {
    let topics = load_topics(&args.syllabus)?;
    let cache = match &args.cache_dir {
        Some(dir) => ContentCache::new(dir),
        None => ContentCache::default_location()?,
    };
    info!(dir = %cache.dir().display(), topics = topics.len(), "Populating content cache");

    let provider = CachedProvider::new(HttpContentFetcher::new(config.fetch.clone())?, cache);

    let mut fetched = 0usize;
    let mut missing = Vec::new();
    for topic in &topics {
        match provider.fetch(topic).await? {
            Some(_) => fetched += 1,
            None => missing.push(topic.clone()),
        }
    }

    println!("Fetched content for {fetched}/{} topics.", topics.len());
    if !missing.is_empty() {
        println!("No content found for: {}", missing.join(", "));
    }
    Ok(())
}

fn build_provider(
    content_dir: Option<&Path>,
    config: &AppConfig,
) -> anyhow::Result<Box<dyn ContentProvider>> {
    match content_dir {
        Some(dir) => Ok(Box::new(DirContentProvider::new(dir))),
        None => {
            let cache = ContentCache::default_location()?;
            let fetcher = HttpContentFetcher::new(config.fetch.clone())?;
            Ok(Box::new(CachedProvider::new(fetcher, cache)))
        }
    }
}
