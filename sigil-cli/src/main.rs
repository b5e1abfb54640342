use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "sigil", version)]
struct Cli {
    /// Store file holding saved sigils.
    #[arg(long, global = true, default_value = "sigils.json")]
    store: PathBuf,

    /// Raise log verbosity (`-v` debug, `-vv` trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a sigil and print its path data.
    Generate(GenerateArgs),
    /// Print the extracted feature set as JSON.
    Features(StatementArgs),
    /// Print the classic reduction steps.
    Steps(StatementArgs),
    /// List stored sigils with their current resonance.
    List,
    /// Record a charge event on a stored sigil.
    Charge(ChargeArgs),
}

#[derive(Parser, Debug)]
struct StatementArgs {
    /// Statement of intent.
    #[arg(long)]
    statement: String,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Statement of intent.
    #[arg(long)]
    statement: String,

    /// Stylistic grammar.
    #[arg(long, value_enum, default_value_t = ParadigmChoice::Chaos)]
    paradigm: ParadigmChoice,

    /// Charging method recorded with `--save`.
    #[arg(long, value_enum, default_value_t = GnosisChoice::Meditation)]
    gnosis: GnosisChoice,

    /// Append the result to the store.
    #[arg(long)]
    save: bool,

    /// Write a standalone SVG preview.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write a PNG preview.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Preview size in pixels.
    #[arg(long, default_value_t = 200)]
    size: u32,

    /// Also print the SHA-256 of the path data.
    #[arg(long)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct ChargeArgs {
    /// Record id as printed by `generate --save` or `list`.
    #[arg(long)]
    id: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ParadigmChoice {
    Chaos,
    Hermetic,
    Shamanic,
    Cybernetic,
}

impl From<ParadigmChoice> for sigil::Paradigm {
    fn from(value: ParadigmChoice) -> Self {
        match value {
            ParadigmChoice::Chaos => sigil::Paradigm::Chaos,
            ParadigmChoice::Hermetic => sigil::Paradigm::Hermetic,
            ParadigmChoice::Shamanic => sigil::Paradigm::Shamanic,
            ParadigmChoice::Cybernetic => sigil::Paradigm::Cybernetic,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GnosisChoice {
    Meditation,
    Dance,
    Exhaustion,
    Sex,
    Pain,
    Intoxication,
    Other,
}

impl From<GnosisChoice> for sigil::GnosisMethod {
    fn from(value: GnosisChoice) -> Self {
        match value {
            GnosisChoice::Meditation => sigil::GnosisMethod::Meditation,
            GnosisChoice::Dance => sigil::GnosisMethod::Dance,
            GnosisChoice::Exhaustion => sigil::GnosisMethod::Exhaustion,
            GnosisChoice::Sex => sigil::GnosisMethod::Sex,
            GnosisChoice::Pain => sigil::GnosisMethod::Pain,
            GnosisChoice::Intoxication => sigil::GnosisMethod::Intoxication,
            GnosisChoice::Other => sigil::GnosisMethod::Other,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(&cli.store, args),
        Command::Features(args) => cmd_features(args),
        Command::Steps(args) => cmd_steps(args),
        Command::List => cmd_list(&cli.store),
        Command::Charge(args) => cmd_charge(&cli.store, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_store(path: &Path) -> anyhow::Result<sigil::SigilStore> {
    sigil::SigilStore::load(path, sigil::ResonanceConfig::default())
        .with_context(|| format!("load store '{}'", path.display()))
}

fn cmd_generate(store_path: &Path, args: GenerateArgs) -> anyhow::Result<()> {
    let now = chrono::Utc::now();
    let generated = sigil::forge(&args.statement, args.paradigm.into(), now)?;
    println!("{}", generated.path_data);
    if args.digest {
        println!("sha256: {}", sha256_hex(generated.path_data.as_bytes()));
    }

    let opts = sigil::PreviewOpts {
        size_px: args.size,
        ..sigil::PreviewOpts::default()
    };

    if let Some(out) = &args.svg {
        let doc = sigil::svg_document(&generated.path_data, &opts)?;
        ensure_parent(out)?;
        std::fs::write(out, doc).with_context(|| format!("write svg '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }

    if let Some(out) = &args.png {
        let frame = sigil::rasterize(&generated.path_data, &opts)?;
        ensure_parent(out)?;
        image::save_buffer_with_format(
            out,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }

    if args.save {
        let mut store = load_store(store_path)?;
        let id = sigil::SigilId::new(uuid::Uuid::new_v4().to_string());
        let record = sigil::SigilRecord::from_generated(id, generated, store.config())
            .with_gnosis_method(args.gnosis.into());
        let saved = store.create(record)?;
        eprintln!("saved {}", saved.id);
        store
            .save(store_path)
            .with_context(|| format!("save store '{}'", store_path.display()))?;
    }

    Ok(())
}

fn cmd_features(args: StatementArgs) -> anyhow::Result<()> {
    let features = sigil::extract(&args.statement);
    let json = serde_json::to_string_pretty(&features).context("serialize features")?;
    println!("{json}");
    Ok(())
}

fn cmd_steps(args: StatementArgs) -> anyhow::Result<()> {
    let steps = sigil::reduce(&args.statement);
    println!("original:  {}", args.statement);
    println!("condensed: {}", steps.condensed);
    println!("devoweled: {}", steps.devoweled);
    println!("essence:   {}", steps.essence);
    Ok(())
}

fn cmd_list(store_path: &Path) -> anyhow::Result<()> {
    let store = load_store(store_path)?;
    if store.is_empty() {
        eprintln!("no sigils in {}", store_path.display());
        return Ok(());
    }

    let now = chrono::Utc::now();
    for record in store.iter() {
        let resonance = sigil::resonance_at(record, now, store.config());
        println!(
            "{}  {:<10}  charges={:<3} resonance={:.3}  {}",
            record.id,
            record.paradigm.as_str(),
            record.charge_events.len(),
            resonance,
            record.statement
        );
    }
    Ok(())
}

fn cmd_charge(store_path: &Path, args: ChargeArgs) -> anyhow::Result<()> {
    let mut store = load_store(store_path)?;
    let id = sigil::SigilId::new(args.id);
    let record = store.append_charge(&id, chrono::Utc::now())?;
    println!(
        "{}  charges={}  resonance={:.3}",
        record.id,
        record.charge_events.len(),
        record.resonance_strength
    );
    store
        .save(store_path)
        .with_context(|| format!("save store '{}'", store_path.display()))?;
    Ok(())
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
