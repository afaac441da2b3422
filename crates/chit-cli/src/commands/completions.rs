//! Shell completions generation and installation.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use super::{Cli, CompletionsAction, ShellType};

impl From<ShellType> for Shell {
    fn from(shell: ShellType) -> Self {
        match shell {
            ShellType::Bash => Self::Bash,
            ShellType::Zsh => Self::Zsh,
            ShellType::Fish => Self::Fish,
            ShellType::PowerShell => Self::PowerShell,
            ShellType::Elvish => Self::Elvish,
        }
    }
}

/// Run the completions command.
pub fn run(action: CompletionsAction) -> Result<()> {
    match action {
        CompletionsAction::Generate { shell } => {
            let mut cmd = Cli::command();
            generate(Shell::from(shell), &mut cmd, "chit", &mut io::stdout());
            Ok(())
        }
        CompletionsAction::Install { shell } => install(resolve(shell)?),
        CompletionsAction::Uninstall { shell } => uninstall(resolve(shell)?),
    }
}

/// Use the override if given, otherwise detect the shell from `$SHELL`.
fn resolve(overridden: Option<ShellType>) -> Result<ShellType> {
    if let Some(shell) = overridden {
        return Ok(shell);
    }

    let shell_path = env::var("SHELL")
        .context("could not detect shell from $SHELL; use --shell to pick one")?;
    let name = shell_path
        .rsplit('/')
        .next()
        .unwrap_or(&shell_path)
        .to_lowercase();

    match name.as_str() {
        "bash" => Ok(ShellType::Bash),
        "zsh" => Ok(ShellType::Zsh),
        "fish" => Ok(ShellType::Fish),
        "pwsh" | "powershell" => Ok(ShellType::PowerShell),
        "elvish" => Ok(ShellType::Elvish),
        other => bail!("unknown shell {other:?}; use --shell to pick one"),
    }
}

/// Where a shell expects the completions file.
fn completions_path(shell: ShellType) -> Result<PathBuf> {
    let home = env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .context("could not determine home directory")?;

    let path = match shell {
        ShellType::Bash => xdg_data(&home).join("bash-completion/completions/chit"),
        ShellType::Zsh => xdg_data(&home).join("zsh/site-functions/_chit"),
        ShellType::Fish => xdg_config(&home).join("fish/completions/chit.fish"),
        ShellType::PowerShell => xdg_config(&home).join("powershell/completions/chit.ps1"),
        ShellType::Elvish => home.join(".elvish/lib/chit.elv"),
    };

    Ok(path)
}

fn xdg_data(home: &Path) -> PathBuf {
    env::var("XDG_DATA_HOME").map_or_else(|_| home.join(".local/share"), PathBuf::from)
}

fn xdg_config(home: &Path) -> PathBuf {
    env::var("XDG_CONFIG_HOME").map_or_else(|_| home.join(".config"), PathBuf::from)
}

fn install(shell: ShellType) -> Result<()> {
    let path = completions_path(shell)?;

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(Shell::from(shell), &mut cmd, "chit", &mut buf);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, &buf).with_context(|| format!("failed to write {}", path.display()))?;

    println!("Installed {shell:?} completions to {}", path.display());
    match shell {
        ShellType::Bash | ShellType::Fish => {
            println!("New shell sessions will pick them up automatically.");
        }
        ShellType::Zsh => {
            if let Some(parent) = path.parent() {
                println!("Make sure {} is on your fpath, then run:", parent.display());
                println!("  autoload -Uz compinit && compinit");
            }
        }
        ShellType::PowerShell => {
            println!("Dot-source the file from your PowerShell profile:");
            println!("  . {}", path.display());
        }
        ShellType::Elvish => {
            println!("Add this to your rc.elv:");
            println!("  use chit");
        }
    }

    Ok(())
}

fn uninstall(shell: ShellType) -> Result<()> {
    let path = completions_path(shell)?;

    if path.exists() {
        fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))?;
        println!("Removed {shell:?} completions from {}", path.display());
    } else {
        println!("No completions file found at {}", path.display());
    }

    Ok(())
}
