use {
    anyhow::Result,
    std::{
        ffi::OsString,
        path::PathBuf,
        str::FromStr,
    },
};

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum ManualFormat {
    Manpages,
    Markdown,
}

#[derive(Debug)]
pub(crate) struct CallArgs {
    pub command: Command,
}

#[derive(Debug, PartialEq)]
pub(crate) enum Command {
    Write,
    Manual {
        path: PathBuf,
        format: ManualFormat,
    },
    Autocomplete {
        path: PathBuf,
        shell: clap_complete::Shell,
    },
}

pub(crate) struct ClapArgumentLoader {}

impl ClapArgumentLoader {
    pub(crate) fn root_command() -> clap::Command {
        clap::Command::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .about("Overwrites the kolo.cd nginx site configuration.")
            .long_about(
                "Overwrites /etc/nginx/sites-enabled/kolo with the built-in site configuration. \
                 Run without a subcommand to write the file. nginx is not reloaded.",
            )
            .propagate_version(true)
            .subcommand_required(false)
            .subcommand(
                clap::Command::new("man")
                    .about("Renders the manual.")
                    .arg(clap::Arg::new("out").short('o').long("out").required(true))
                    .arg(
                        clap::Arg::new("format")
                            .short('f')
                            .long("format")
                            .value_parser(["manpages", "markdown"])
                            .required(true),
                    ),
            )
            .subcommand(
                clap::Command::new("autocomplete")
                    .about("Renders shell completion scripts.")
                    .arg(clap::Arg::new("out").short('o').long("out").required(true))
                    .arg(
                        clap::Arg::new("shell")
                            .short('s')
                            .long("shell")
                            .value_parser(["bash", "zsh", "fish", "elvish", "powershell"])
                            .required(true),
                    ),
            )
    }

    pub(crate) fn load() -> Result<CallArgs> {
        Self::load_from(std::env::args_os())
    }

    pub(crate) fn load_from<I, T>(args: I) -> Result<CallArgs>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = Self::root_command().get_matches_from(args);

        let cmd = match command.subcommand() {
            | None => Command::Write,
            | Some(("man", subc)) => Command::Manual {
                path: required(subc, "out")?.into(),
                format: match required(subc, "format")?.as_str() {
                    | "manpages" => ManualFormat::Manpages,
                    | "markdown" => ManualFormat::Markdown,
                    | _ => return Err(anyhow::anyhow!("argument \"format\": unknown format")),
                },
            },
            | Some(("autocomplete", subc)) => Command::Autocomplete {
                path: required(subc, "out")?.into(),
                shell: clap_complete::Shell::from_str(required(subc, "shell")?)
                    .map_err(|e| anyhow::anyhow!("argument \"shell\": {}", e))?,
            },
            | Some(_) => return Err(anyhow::anyhow!("unknown command")),
        };

        Ok(CallArgs { command: cmd })
    }
}

fn required<'a>(matches: &'a clap::ArgMatches, id: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(id)
        .ok_or_else(|| anyhow::anyhow!("argument \"{}\" is required", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_writes() {
        let args = ClapArgumentLoader::load_from(["kolo-nginx"]).unwrap();
        assert_eq!(args.command, Command::Write);
    }

    #[test]
    fn parses_manual() {
        let args = ClapArgumentLoader::load_from(["kolo-nginx", "man", "-o", "docs", "-f", "markdown"]).unwrap();
        assert_eq!(args.command, Command::Manual {
            path: PathBuf::from("docs"),
            format: ManualFormat::Markdown,
        });
    }

    #[test]
    fn parses_autocomplete() {
        let args =
            ClapArgumentLoader::load_from(["kolo-nginx", "autocomplete", "--out", "completions", "--shell", "zsh"])
                .unwrap();
        assert_eq!(args.command, Command::Autocomplete {
            path: PathBuf::from("completions"),
            shell: clap_complete::Shell::Zsh,
        });
    }

    #[test]
    fn help_carries_no_author() {
        let mut app = ClapArgumentLoader::root_command();
        assert!(app.get_author().is_none());
        assert!(!app.render_long_help().to_string().contains('@'));
    }

    #[test]
    fn command_tree_is_consistent() {
        ClapArgumentLoader::root_command().debug_assert();
    }
}
