use std::path::Path;

use chrono::Local;
use clap::Parser;
use ctxlog::*;
use forge::attach_pull_requests;
use git::{get_commit_log, is_git_repository};
use group::{commit_count, group_commits};
use style::icons;

/// Load config from args or default
fn load_config_from_args(args: &Args) -> Result<ChangelogConfig> {
   if let Some(ref config_path) = args.config {
      ChangelogConfig::from_file(config_path)
   } else {
      ChangelogConfig::load()
   }
}

/// Build renderer options; colors only for console output on a terminal
fn build_render_options(config: &ChangelogConfig, to_file: bool) -> RenderOptions {
   RenderOptions {
      title:         config.title.clone(),
      include_why:   config.include_why,
      generated_at:  Local::now(),
      color:         !to_file && config.format == OutputFormat::Console && style::colors_enabled(),
      template_dirs: templates::search_dirs(config.templates_dir.as_deref()),
   }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
   std::fs::write(path, content)?;
   println!(
      "{} Changelog written to {}",
      style::success(icons::SUCCESS),
      path.display()
   );
   Ok(())
}

/// Pipeline: validate repo → fetch and classify → group → render → emit
fn run(args: &Args) -> Result<()> {
   let mut config = load_config_from_args(args)?;
   config.apply_args(args);

   if !is_git_repository(&args.repo) {
      return Err(ChangelogError::NotARepository { path: args.repo.clone() });
   }

   let commits =
      get_commit_log(config.limit, args.since.as_deref(), args.until.as_deref(), &args.repo);
   if commits.is_empty() {
      println!("{}", style::info("No commits found in the specified range."));
      return Ok(());
   }

   let mut groups = group_commits(commits, &args.repo);
   style::debug(&format!("Grouped {} commits into {} types", commit_count(&groups), groups.len()));
   if config.pull_requests {
      attach_pull_requests(&mut groups, &args.repo);
   }

   if args.title.is_some() && config.format != OutputFormat::Markdown {
      style::warn(&format!(
         "--title only applies to markdown output, ignoring for {}",
         config.format
      ));
   }

   let opts = build_render_options(&config, args.output.is_some());
   let content = render::render(&groups, config.format, &opts)?;

   match args.output {
      Some(ref path) => write_output(path, &content),
      None => {
         print!("{content}");
         if !content.ends_with('\n') {
            println!();
         }
         Ok(())
      },
   }
}

fn main() {
   let args = Args::parse();
   style::set_verbose(
      args.verbose || std::env::var("CTXLOG_VERBOSE").is_ok_and(|v| style::env_flag_enabled(&v)),
   );

   if let Err(e) = run(&args) {
      eprintln!("{}", style::error(&format!("Error: {e}")));
      std::process::exit(1);
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_render_options_follow_config() {
      let config = ChangelogConfig {
         title: "Release Notes".to_string(),
         include_why: false,
         format: OutputFormat::Markdown,
         ..Default::default()
      };
      let opts = build_render_options(&config, false);
      assert_eq!(opts.title, "Release Notes");
      assert!(!opts.include_why);
      assert!(!opts.color);
   }

   #[test]
   fn test_no_color_when_writing_file() {
      let config = ChangelogConfig::default();
      assert!(!build_render_options(&config, true).color);
   }

   #[test]
   fn test_configured_templates_dir_searched_first() {
      let config = ChangelogConfig {
         templates_dir: Some("/opt/ctxlog/templates".into()),
         ..Default::default()
      };
      let opts = build_render_options(&config, false);
      assert_eq!(opts.template_dirs[0], Path::new("/opt/ctxlog/templates"));
   }
}
