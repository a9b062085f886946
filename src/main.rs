use anyhow::Context;
use clap::Parser;
use hr_pillar_common::{analyze_with, AnalyzeOptions, Catalog, MatchOptions, PassthroughTranslator, StopWords, Translator};
use hr_pillar_rust::{cli, config, input, logging, report, translator};
use cli::{Cli, Commands};
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use input::InputSource;
use std::path::Path;

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::from_csv(path)
            .with_context(|| format!("カタログを読み込めません: {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load()?;
    if let Some(provider) = cli.ai_provider {
        config.ai_provider = provider;
    }

    match cli.command {
        Commands::Analyze { input, text, catalog, translate, source, target, keep_stop_words, json, excel, yes } => {
            println!("📋 hr-pillar - 職務分析\n");

            let catalog = load_catalog(catalog.as_deref())?;
            tracing::debug!(entries = catalog.len(), "catalog loaded");

            // 1. 入力
            let source_kind = InputSource::select(input.as_deref(), &text);
            let lines = input::read_lines(&source_kind)?;

            if lines.is_empty() {
                println!("⚠ 職務を1件以上入力してください");
                return Ok(());
            }

            println!("## 入力された職務 ({}件)", lines.len());
            for line in &lines {
                println!("  - {}", line);
            }
            println!();

            if source_kind.is_interactive() && !yes && !input::confirm_analysis(lines.len())? {
                println!("分析を中止しました");
                return Ok(());
            }

            // 2. 分析
            let (translate, source, target) = config.resolve_locales(translate, source, target);
            let options = AnalyzeOptions {
                match_options: MatchOptions {
                    stop_words: if keep_stop_words || config.keep_stop_words {
                        StopWords::None
                    } else {
                        StopWords::English
                    },
                },
                source,
                target,
            };

            let progress = if translate {
                let pb = ProgressBar::new(lines.len() as u64);
                pb.set_style(
                    ProgressStyle::with_template("{spinner} 翻訳中 [{bar:30}] {pos}/{len}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                println!("- {} で翻訳中 ({} → {})...", config.ai_provider, options.source, options.target);
                Some(pb)
            } else {
                None
            };

            let cli_translator = progress
                .clone()
                .map(|pb| translator::CliTranslator::new(config.ai_provider).with_progress(pb));
            let active: &dyn Translator = match &cli_translator {
                Some(t) => t as &dyn Translator,
                None => &PassthroughTranslator,
            };

            let result = analyze_with(&catalog, &lines, active, &options);
            if let Some(pb) = &progress {
                pb.finish_and_clear();
            }
            let analysis = result?.stamped(chrono::Utc::now());

            // 3. 表示
            report::print_report(&analysis, translate);

            // 4. 保存
            if let Some(path) = json {
                report::write_json(&analysis, &path)
                    .with_context(|| format!("JSONを保存できません: {}", path.display()))?;
                println!("✔ JSON出力: {}", path.display());
            }
            if let Some(path) = excel {
                report::write_excel(&analysis, &path)
                    .with_context(|| format!("Excelを保存できません: {}", path.display()))?;
                println!("✔ Excel出力: {}", path.display());
            }
        }

        Commands::Catalog { catalog, csv } => {
            let catalog = load_catalog(catalog.as_deref())?;
            if csv {
                print!("{}", catalog.to_csv_string());
            } else {
                report::print_catalog(&catalog);
            }
        }

        Commands::Config { set_provider, set_source, set_keep_stop_words, set_translate, show } => {
            let mut changed = false;

            if let Some(provider) = set_provider {
                config.ai_provider = provider;
                changed = true;
            }
            if let Some(locale) = set_source {
                config.source_locale = locale;
                changed = true;
            }
            if let Some(keep) = set_keep_stop_words {
                config.keep_stop_words = keep;
                changed = true;
            }
            if let Some(translate) = set_translate {
                config.translate_by_default = translate;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  AIプロバイダ: {}", config.ai_provider);
                println!("  入力言語: {}", config.source_locale);
                println!("  カタログ言語: {}", config.target_locale);
                println!("  ストップワード: {}", if config.keep_stop_words { "残す" } else { "除去" });
                println!("  既定で翻訳: {}", if config.translate_by_default { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
