// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Vouchbook CLI entrypoint.
//!
//! By default this runs the interactive TUI over the dataset file. `--html` prints one rendered
//! page to stdout; `--serve` serves the page at `http://127.0.0.1:<port>/`.

use std::error::Error;
use std::sync::Arc;

use vouchbook::logging::{self, LogTarget};
use vouchbook::ops::{Leaderboard, ViewEvent};
use vouchbook::render::{render_load_error, render_page};
use vouchbook::server::{self, AppState, DEFAULT_HTTP_PORT};
use vouchbook::store::DatasetFile;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<data-file>] [--data <path>] [--log-file <path>]\n  {program} [<data-file>] --html [--search <text>] [--sort <key>] [--min-repos <n>] [--select <user-key>]\n  {program} [<data-file>] --serve [--port <port>]\n\nTUI mode (default) shows the interactive leaderboard; logs go to --log-file only.\n--html prints one rendered page to stdout. --serve serves it at `http://127.0.0.1:<port>/`\n(0 = ephemeral; default {DEFAULT_HTTP_PORT}).\n\nIf data-file/--data is omitted, $VOUCHBOOK_DATA is used, then data/vouch_book.json.\nSort keys: score, user, active_repo_count, stars_total."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    data_path: Option<String>,
    log_file: Option<String>,
    html: bool,
    serve: bool,
    port: Option<u16>,
    search: Option<String>,
    sort: Option<String>,
    min_repos: Option<String>,
    select: Option<String>,
}

impl CliOptions {
    fn has_view_flags(&self) -> bool {
        self.search.is_some()
            || self.sort.is_some()
            || self.min_repos.is_some()
            || self.select.is_some()
    }

    /// View flags in the order the page form applies them.
    fn view_events(&self) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        if let Some(search) = &self.search {
            events.push(ViewEvent::SearchInput(search.clone()));
        }
        if let Some(sort) = &self.sort {
            events.push(ViewEvent::SortInput(sort.clone()));
        }
        if let Some(min_repos) = &self.min_repos {
            events.push(ViewEvent::MinReposInput(min_repos.clone()));
        }
        if let Some(select) = &self.select {
            events.push(ViewEvent::SelectRow(select.clone()));
        }
        events
    }
}

fn set_once(slot: &mut Option<String>, args: &mut impl Iterator<Item = String>) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(args.next().ok_or(())?);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--html" => {
                if options.html {
                    return Err(());
                }
                options.html = true;
            }
            "--serve" => {
                if options.serve {
                    return Err(());
                }
                options.serve = true;
            }
            "--data" => set_once(&mut options.data_path, &mut args)?,
            "--log-file" => set_once(&mut options.log_file, &mut args)?,
            "--search" => set_once(&mut options.search, &mut args)?,
            "--sort" => set_once(&mut options.sort, &mut args)?,
            "--min-repos" => set_once(&mut options.min_repos, &mut args)?,
            "--select" => set_once(&mut options.select, &mut args)?,
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.port = Some(port);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.data_path.is_some() {
                    return Err(());
                }
                options.data_path = Some(arg);
            }
        }
    }

    if options.html && options.serve {
        return Err(());
    }

    if options.has_view_flags() && !options.html {
        return Err(());
    }

    if options.port.is_some() && !options.serve {
        return Err(());
    }

    Ok(options)
}

fn log_target(options: &CliOptions) -> LogTarget {
    match &options.log_file {
        Some(path) => LogTarget::File(path.into()),
        None if options.html || options.serve => LogTarget::Stderr,
        None => LogTarget::Off,
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "vouchbook".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        logging::init(&log_target(&options))?;

        let file = DatasetFile::resolve(options.data_path.as_deref());
        let loaded = file.load();

        if options.html {
            let dataset = match loaded {
                Ok(dataset) => dataset,
                Err(err) => {
                    let data_path = file.path().display().to_string();
                    println!("{}", render_load_error(&data_path, &err.to_string()));
                    return Err(err.into());
                }
            };

            let mut board = Leaderboard::new(Arc::new(dataset));
            for event in options.view_events() {
                board.apply(event);
            }
            let rendered = board.render();
            println!("{}", render_page(board.view(), &rendered));
            return Ok(());
        }

        if options.serve {
            let port = options.port.unwrap_or(DEFAULT_HTTP_PORT);
            let state = AppState::from_load(&file, loaded);

            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
                server::serve(listener, state).await
            })?;
            return Ok(());
        }

        vouchbook::tui::run(loaded)
    })();

    if let Err(err) = result {
        eprintln!("vouchbook: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use vouchbook::logging::LogTarget;
    use vouchbook::ops::ViewEvent;

    use super::{log_target, parse_options, CliOptions};

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values.iter().map(|value| (*value).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
        assert_eq!(log_target(&options), LogTarget::Off);
    }

    #[test]
    fn parses_positional_data_file() {
        let options = parse_options(args(&["book.json"])).expect("parse options");
        assert_eq!(options.data_path.as_deref(), Some("book.json"));
        assert!(!options.html);
        assert!(!options.serve);
    }

    #[test]
    fn parses_data_flag_and_log_file() {
        let options = parse_options(args(&["--data", "a.json", "--log-file", "tui.log"]))
            .expect("parse options");
        assert_eq!(options.data_path.as_deref(), Some("a.json"));
        assert_eq!(log_target(&options), LogTarget::File("tui.log".into()));
    }

    #[test]
    fn parses_html_view_flags_in_form_order() {
        let options = parse_options(args(&[
            "--select", "bob", "--html", "--min-repos", "2", "--search", "Bo", "--sort", "user",
        ]))
        .expect("parse options");
        assert!(options.html);
        assert_eq!(log_target(&options), LogTarget::Stderr);
        assert_eq!(
            options.view_events(),
            vec![
                ViewEvent::SearchInput("Bo".to_owned()),
                ViewEvent::SortInput("user".to_owned()),
                ViewEvent::MinReposInput("2".to_owned()),
                ViewEvent::SelectRow("bob".to_owned()),
            ]
        );
    }

    #[test]
    fn view_flag_values_are_not_validated_here() {
        let options = parse_options(args(&["--html", "--min-repos", "-3", "--sort", "bogus"]))
            .expect("parse options");
        assert_eq!(options.min_repos.as_deref(), Some("-3"));
        assert_eq!(options.sort.as_deref(), Some("bogus"));
    }

    #[test]
    fn parses_serve_port() {
        let options = parse_options(args(&["--serve", "--port", "0"])).expect("parse options");
        assert!(options.serve);
        assert_eq!(options.port, Some(0));
        assert_eq!(log_target(&options), LogTarget::Stderr);
    }

    #[test]
    fn rejects_html_with_serve() {
        parse_options(args(&["--html", "--serve"])).unwrap_err();
    }

    #[test]
    fn rejects_view_flags_without_html() {
        parse_options(args(&["--search", "bob"])).unwrap_err();
        parse_options(args(&["--serve", "--sort", "user"])).unwrap_err();
    }

    #[test]
    fn rejects_port_without_serve() {
        parse_options(args(&["--port", "8080"])).unwrap_err();
    }

    #[test]
    fn rejects_bad_port() {
        parse_options(args(&["--serve", "--port", "99999"])).unwrap_err();
        parse_options(args(&["--serve", "--port"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(args(&["--nope"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(args(&["--html", "--html"])).unwrap_err();
        parse_options(args(&["--serve", "--serve"])).unwrap_err();
        parse_options(args(&["--data", "a", "--data", "b"])).unwrap_err();
        parse_options(args(&["--html", "--search", "a", "--search", "b"])).unwrap_err();
    }

    #[test]
    fn rejects_multiple_data_paths() {
        parse_options(args(&["one.json", "two.json"])).unwrap_err();
        parse_options(args(&["--data", "one.json", "two.json"])).unwrap_err();
    }

    #[test]
    fn rejects_missing_flag_value() {
        parse_options(args(&["--data"])).unwrap_err();
        parse_options(args(&["--html", "--select"])).unwrap_err();
    }
}
