use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use std::io::{self, stdin, stdout, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vyakarana_core::config::AnalyzerConfig;
use vyakarana_core::core::engine::{NounResult, VerbResult};
use vyakarana_core::persistence::load_configured;
use vyakarana_core::{AnalysisResult, Analyzer};

#[derive(Parser)]
#[command(name = "vyakarana")]
#[command(about = "Word-by-word grammatical analysis of Sanskrit sentences in Devanagari")]
struct Args {
    /// Sentence to analyse. Without one, sentences are read from stdin.
    sentence: Vec<String>,

    /// JSON config file with corpus paths
    #[arg(long)]
    config: Option<PathBuf>,

    /// Noun paradigm corpus
    #[arg(long, env = "VYAKARANA_NOUNS")]
    nouns: Option<PathBuf>,

    /// Verb paradigm corpus
    #[arg(long, env = "VYAKARANA_VERBS")]
    verbs: Option<PathBuf>,

    /// Compiled corpus cache, written on first use
    #[arg(long, env = "VYAKARANA_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Also print the full corpus entry of every match
    #[arg(long)]
    full: bool,
}

impl Args {
    fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => AnalyzerConfig::default(),
        };
        if let Some(nouns) = &self.nouns {
            config.noun_corpus = nouns.clone();
        }
        if let Some(verbs) = &self.verbs {
            config.verb_corpus = verbs.clone();
        }
        if let Some(snapshot) = &self.snapshot {
            config.snapshot = Some(snapshot.clone());
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.analyzer_config()?;
    let load = load_configured(&config);
    let analyzer = Analyzer::new(load.corpus);

    if !args.sentence.is_empty() {
        return report(&analyzer, &args.sentence.join(" "), &args);
    }

    println!("{}", "Sanskrit Sentence Analyzer. Type 'exit' to quit.".bold());
    println!("---------------------------------------------------------------");
    let mut lines = stdin().lock().lines();
    loop {
        print!("\n> ");
        stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.trim() {
            "exit" => break,
            "" => continue,
            sentence => report(&analyzer, sentence, &args)?,
        }
    }
    Ok(())
}

fn report(analyzer: &Analyzer, sentence: &str, args: &Args) -> Result<()> {
    let results = analyzer.analyze_sentence(sentence);
    let mut out = stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &results)?;
        writeln!(out)?;
        return Ok(());
    }

    if results.is_empty() {
        writeln!(out, "No Devanagari words found.")?;
    }
    for result in &results {
        print_result(&mut out, result)?;
        if args.full && !result.is_unknown() {
            if let Some(raw) = analyzer.corpus().raw_entry_for(result.surface_form()) {
                writeln!(out, "\n{raw}")?;
            } else if let AnalysisResult::Verb(verb) = result {
                // Matched through a stripped preverb; the entry lists the bare form.
                let bare = verb.surface_form.strip_prefix(verb.upasarga.as_deref().unwrap_or(""));
                if let Some(raw) = bare.and_then(|form| analyzer.corpus().raw_entry_for(form)) {
                    writeln!(out, "\n{raw}")?;
                }
            }
            writeln!(out, "{}", "=".repeat(60))?;
        }
    }
    Ok(())
}

fn print_result(out: &mut impl Write, result: &AnalysisResult) -> io::Result<()> {
    match result {
        AnalysisResult::Noun(noun) => print_noun(out, noun),
        AnalysisResult::Verb(verb) => print_verb(out, verb),
        AnalysisResult::Unknown(unknown) => {
            writeln!(out, "\n{} {}", unknown.surface_form.as_str().bold(), "Unknown".red())?;
            writeln!(out, "   No grammatical info found.")
        }
    }
}

fn print_noun(out: &mut impl Write, noun: &NounResult) -> io::Result<()> {
    writeln!(out, "\n{} {}", noun.surface_form.as_str().bold(), "नामपद (Noun)".blue())?;
    writeln!(out, "   नामपद      : {}", noun.lemma)?;
    writeln!(out, "   लिङ्गः       : {}", noun.gender)?;
    writeln!(out, "   विभक्तिः    : {}", noun.case)?;
    writeln!(out, "   वचनम्       : {}", noun.number)?;
    writeln!(out, "   कारकः       : {} ({})", noun.role, noun.role_gloss)?;
    if let Some(gloss) = &noun.gloss {
        writeln!(out, "   अर्थः        : {gloss}")?;
    }
    if let Some(citation) = &noun.ablative_citation {
        writeln!(out, "   {} : {}", "सूत्रम्".yellow(), citation)?;
    }
    Ok(())
}

fn print_verb(out: &mut impl Write, verb: &VerbResult) -> io::Result<()> {
    writeln!(out, "\n{} {}", verb.surface_form.as_str().bold(), "धातु (Verb)".green())?;
    writeln!(out, "   धातुः       : {}", verb.root)?;
    writeln!(out, "   अर्थः        : {}", verb.gloss)?;
    writeln!(out, "   लकारः       : {}", verb.lakara)?;
    writeln!(out, "   पुरुषः       : {}", verb.person)?;
    writeln!(out, "   वचनम्       : {}", verb.number)?;
    writeln!(out, "   गणः        : {}", verb.verb_class)?;
    if let Some(upasarga) = &verb.upasarga {
        writeln!(out, "   उपसर्गः      : {upasarga}")?;
    }
    if let Some(citation) = &verb.citation {
        writeln!(out, "   {} : {}", "Kāraka Sūtra".yellow(), citation)?;
    }
    Ok(())
}
