use babelmod::{Catalog, MockClassifier, TitleParser};
use clap::{Arg, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let matches = Command::new("babelmod")
        .version("0.1.0")
        .about("Language resolution and title parsing for translation requests")
        .arg(
            Arg::new("input")
                .help("Post title to parse (or language reference with --resolve)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("resolve")
                .long("resolve")
                .short('r')
                .help("Resolve the input as a language reference instead of a title")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .short('l')
                .help("Resolve the input as a delimited language list")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("attachment")
                .long("attachment")
                .short('a')
                .help("Attachment reference passed to the classifier fallback"),
        )
        .arg(
            Arg::new("mock-classifier")
                .long("mock-classifier")
                .help("Answer classifier fallbacks with a canned ja > en result")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let catalog = Catalog::core();

    if matches.get_flag("resolve") {
        match catalog.resolve(input) {
            Some(descriptor) => {
                println!("{}", descriptor);
                return Ok(());
            }
            None => {
                eprintln!("No language recognized in \"{}\"", input);
                return Err("unrecognized language".into());
            }
        }
    }

    if matches.get_flag("list") {
        for descriptor in catalog.resolve_list(input) {
            println!("{}", descriptor);
        }
        return Ok(());
    }

    let mock = MockClassifier::answering("ja", "en", 0.9);
    let mut parser = TitleParser::new(&catalog);
    if matches.get_flag("mock-classifier") {
        parser = parser.with_classifier(&mock);
    }

    let attachment = matches.get_one::<String>("attachment").map(|s| s.as_str());
    let result = parser.parse(input, attachment).await;

    println!("Cleaned:   {}", result.cleaned_title);
    println!("Source:    {}", join_descriptors(&result.source));
    println!("Target:    {}", join_descriptors(&result.target));
    println!("Direction: {}", result.direction);
    if let Some(text) = &result.flair_text {
        println!(
            "Flair:     {} ({})",
            text,
            result.flair_code.as_deref().unwrap_or("-")
        );
    }
    if !result.notify.is_empty() {
        println!(
            "Notify:    {}",
            result
                .notify
                .iter()
                .map(|d| d.preferred_code())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    if result.ai_assessed {
        println!("(languages assessed by the classifier fallback)");
    }

    if result.is_empty() {
        eprintln!("No languages recognized in \"{}\"", input);
        return Err("no languages recognized".into());
    }

    Ok(())
}

fn join_descriptors(descriptors: &[babelmod::Descriptor]) -> String {
    descriptors
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
