use anyhow::Context;
use clap::Parser;
use skill_gap::{cli, config, display, export, loader, logging, selector};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use loader::Dataset;
use skill_gap_common::{evaluate, list_distinct, list_job_titles, list_program_units, Evaluation, JobColumn, Selection};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load().context("設定の読み込みに失敗しました")?;
    let jobs_path = cli.jobs.clone().unwrap_or_else(|| config.jobs_path());
    let programs_path = cli.programs.clone().unwrap_or_else(|| config.programs_path());

    match cli.command {
        Commands::Fields => {
            let jobs = loader::load_jobs(&jobs_path)
                .with_context(|| format!("read {}", jobs_path.display()))?;
            for field in list_distinct(&jobs, JobColumn::Field) {
                println!("{}", field);
            }
        }

        Commands::Titles { field } => {
            let jobs = loader::load_jobs(&jobs_path)
                .with_context(|| format!("read {}", jobs_path.display()))?;
            let titles = list_job_titles(&jobs, &field);
            if titles.is_empty() {
                println!("⚠ 分野「{}」の職種はありません", field);
            }
            for title in titles {
                println!("{}", title);
            }
        }

        Commands::Programs => {
            let records = loader::load_program_skills(&programs_path)
                .with_context(|| format!("read {}", programs_path.display()))?;
            for unit in list_program_units(&records) {
                println!("{}", unit);
            }
        }

        Commands::Show { field, job, program, format, save, output, excel } => {
            let dataset = load_dataset(&jobs_path, &programs_path)?;
            let selection = Selection::new(Some(field), Some(job), program);
            let evaluation = evaluate(&dataset.jobs, &dataset.program_skills, &selection);

            match format {
                OutputFormat::Text => print!("{}", display::render_evaluation(&evaluation)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&evaluation)?),
            }

            if !matches!(evaluation, Evaluation::Matches(_)) {
                return Ok(());
            }

            let output_dir = output.unwrap_or_else(|| config.report_dir.clone());
            let views = evaluation.views();

            if save {
                if let Some(path) = export::save_report(views, &output_dir)
                    .with_context(|| format!("write report to {}", output_dir.display()))?
                {
                    println!("✔ レポートを保存: {}", path.display());
                }
            }

            if excel {
                if let Some(path) = export::excel::generate_excel(views, &output_dir)
                    .with_context(|| format!("write workbook to {}", output_dir.display()))?
                {
                    println!("✔ Excel出力: {}", path.display());
                }
            }
        }

        Commands::Interactive { output } => {
            let dataset = load_dataset(&jobs_path, &programs_path)?;
            println!("🔍 Job Skills Finder + Program Comparison\n");
            let output_dir = output.unwrap_or_else(|| config.report_dir.clone());
            selector::run_interactive(&dataset, &output_dir)?;
        }

        Commands::Config { set_jobs, set_programs, set_report_dir, show } => {
            let mut config = config;
            let changed = set_jobs.is_some() || set_programs.is_some() || set_report_dir.is_some();

            if let Some(path) = set_jobs {
                config.jobs_path = path;
            }
            if let Some(path) = set_programs {
                config.programs_path = path;
            }
            if let Some(path) = set_report_dir {
                config.report_dir = path;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  職種テーブル: {}", config.jobs_path().display());
                println!("  プログラム別スキル: {}", config.programs_path().display());
                println!("  レポート保存先: {}", config.report_dir.display());
            }
        }
    }

    Ok(())
}

fn load_dataset(jobs_path: &Path, programs_path: &Path) -> anyhow::Result<Dataset> {
    Dataset::load(jobs_path, programs_path).with_context(|| {
        format!(
            "read {} / {}",
            jobs_path.display(),
            programs_path.display()
        )
    })
}
