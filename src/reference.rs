use {
    crate::args::ClapArgumentLoader,
    anyhow::{Context, Result},
    std::{
        fs::File,
        io::Write,
        path::Path,
    },
    tracing::debug,
};

pub fn build_shell_completion(outdir: &Path, shell: &clap_complete::Shell) -> Result<()> {
    let mut app = ClapArgumentLoader::root_command();
    let bin_name = app.get_name().to_string();
    let generated = clap_complete::generate_to(*shell, &mut app, bin_name, outdir)
        .with_context(|| format!("Failed to write completion script to: {}", outdir.display()))?;
    debug!(path = %generated.display(), "rendered completion script");
    Ok(())
}

pub fn build_markdown(outdir: &Path) -> Result<()> {
    let app = ClapArgumentLoader::root_command();
    let file = outdir.join(format!("{}.md", app.get_name()));
    let markdown = clap_markdown::help_markdown_command(&app);
    std::fs::write(&file, markdown)
        .with_context(|| format!("Failed to write manual to: {}", file.display()))?;
    debug!(path = %file.display(), "rendered markdown manual");
    Ok(())
}

pub fn build_manpages(outdir: &Path) -> Result<()> {
    fn write(app: &clap::Command, file: &Path) -> Result<()> {
        let mut buffer = Vec::<u8>::new();
        clap_mangen::Man::new(app.clone())
            .render(&mut buffer)
            .with_context(|| format!("Failed to render manpage: {}", file.display()))?;
        let mut out = File::create(file)
            .with_context(|| format!("Failed to open manpage for writing: {}", file.display()))?;
        out.write_all(&buffer)
            .with_context(|| format!("Failed to write manpage to: {}", file.display()))?;
        debug!(path = %file.display(), "rendered manpage");
        Ok(())
    }

    let app = ClapArgumentLoader::root_command();
    let name = app.get_name().to_string();
    write(&app, &outdir.join(format!("{}.1", name)))?;
    for subc in app.get_subcommands() {
        let sub_name = format!("{}-{}", name, subc.get_name());
        let sub_app = subc.clone().name(sub_name.clone());
        write(&sub_app, &outdir.join(format!("{}.1", sub_name)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manpages_cover_every_subcommand() {
        let dir = tempfile::tempdir().unwrap();
        build_manpages(dir.path()).unwrap();

        for page in ["kolo-nginx.1", "kolo-nginx-man.1", "kolo-nginx-autocomplete.1"] {
            let content = std::fs::read_to_string(dir.path().join(page)).unwrap();
            assert!(content.contains(".TH"), "{page}");
        }
    }

    #[test]
    fn markdown_lists_subcommands() {
        let dir = tempfile::tempdir().unwrap();
        build_markdown(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("kolo-nginx.md")).unwrap();
        assert!(content.contains("kolo-nginx man"));
        assert!(content.contains("kolo-nginx autocomplete"));
    }

    #[test]
    fn bash_completion_is_named_after_binary() {
        let dir = tempfile::tempdir().unwrap();
        build_shell_completion(dir.path(), &clap_complete::Shell::Bash).unwrap();

        let script = std::fs::read_to_string(dir.path().join("kolo-nginx.bash")).unwrap();
        assert!(script.contains("kolo-nginx"));
    }
}
