use anyhow::{Context, Result};
use clap::Parser;
use han_pinyin::{first_reading, ConversionConfig, PinyinEngine, ToneStyle, Transliterate};
use std::io::{self, Read};

/// han-pinyin: convert Chinese text to pinyin without running the server.
///   han-pinyin 我来了                  -> [["wǒ"],["lái"],["le"]]
///   echo 中国 | han-pinyin --style tone3
#[derive(Parser, Debug)]
#[command(name = "han-pinyin", version, about = "Chinese text to pinyin")]
struct Cli {
    /// Text to convert; read from STDIN when omitted
    text: Option<String>,

    /// normal | tone | tone2 | tone3 | initials | first-letter
    #[arg(long, default_value_t = ToneStyle::Tone)]
    style: ToneStyle,

    /// List every known reading per character
    #[arg(long)]
    heteronym: bool,

    /// Print only the first reading of the first character
    #[arg(long)]
    first: bool,
}

fn read_stdin_string() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).context("failed reading STDIN")?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

fn render(cli: &Cli, text: &str) -> Result<String> {
    let config = ConversionConfig::new(cli.style).with_heteronym(cli.heteronym);
    let readings = PinyinEngine.convert(text, &config);
    if cli.first {
        Ok(first_reading(&readings))
    } else {
        serde_json::to_string(&readings).context("failed encoding result")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let text = match &cli.text {
        Some(t) => t.clone(),
        None => read_stdin_string()?,
    };
    println!("{}", render(&cli, &text)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("han-pinyin").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_json_output() {
        let c = cli(&["我来了"]);
        assert_eq!(render(&c, "我来了").unwrap(), r#"[["wǒ"],["lái"],["le"]]"#);
    }

    #[test]
    fn test_first_and_style() {
        let c = cli(&["--style", "tone3", "--first"]);
        assert_eq!(c.text, None);
        assert_eq!(render(&c, "中国").unwrap(), "zhong1");
    }

    #[test]
    fn test_empty_first() {
        let c = cli(&["--first"]);
        assert_eq!(render(&c, "").unwrap(), "");
    }

    #[test]
    fn test_rejects_unknown_style() {
        let res = Cli::try_parse_from(["han-pinyin", "--style", "tone9", "中"]);
        assert!(res.is_err());
    }
}
