//! System commands: help, ls, cat, open, clear, exit, plus the Easter eggs.

use std::time::Duration;

use folio_types::error::Result;

use crate::host::TERMINAL_PANEL;
use crate::interpreter::{Category, Command, Environment};
use crate::registry::CommandRegistry;
use crate::scheduler::Deferred;

/// Register the system commands and their aliases.
///
/// `logout` and `quit` delegate to `exit`.
pub fn register_builtins(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Box::new(LsCmd))?;
    reg.register(Box::new(CatCmd))?;
    reg.register(Box::new(OpenCmd))?;
    reg.register(Box::new(ClearCmd))?;
    reg.register(Box::new(HelpCmd))?;
    reg.register(Box::new(ExitCmd))?;
    reg.register_alias("logout", "exit")?;
    reg.register_alias("quit", "exit")?;
    reg.register(Box::new(SudoCmd))?;
    reg.register(Box::new(VimCmd))?;
    reg.register(Box::new(NanoCmd))?;
    Ok(())
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|l| l.to_string()).collect()
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "show this help message"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn category(&self) -> Category {
        Category::System
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<Vec<String>> {
        if let Some(&name) = args.first() {
            return Ok(match env.registry.resolve(name) {
                Some(cmd) => {
                    let mut out = Vec::new();
                    match cmd.alias_of() {
                        Some(target) => out.push(format!("{}: alias for {target}", cmd.name())),
                        None => out.push(format!("{} - {}", cmd.name(), cmd.description())),
                    }
                    out.push(format!("  usage: {}", cmd.usage()));
                    out.push(String::new());
                    out
                },
                None => vec![
                    format!("help: no such command: {}", name.to_lowercase()),
                    String::new(),
                ],
            });
        }

        let mut out = vec!["available commands:".to_string(), String::new()];
        for category in Category::LISTED {
            let listed: Vec<&dyn Command> = env
                .registry
                .commands()
                .filter(|c| c.category() == category && c.alias_of().is_none())
                .collect();
            if listed.is_empty() {
                continue;
            }
            out.push(format!("  {}:", category.label()));
            for cmd in listed {
                out.push(format!("    {:<10} {}", cmd.name(), cmd.description()));
            }
            out.push(String::new());
        }
        out.push("Tip: You can use tab-completion for commands and filenames!".to_string());
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "list virtual files"
    }
    fn category(&self) -> Category {
        Category::System
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<Vec<String>> {
        let mut out = vec![".".to_string(), "..".to_string()];
        out.extend(env.files.names().into_iter().map(str::to_string));
        out.push(String::new());
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "read a virtual file"
    }
    fn usage(&self) -> &str {
        "cat <filename>"
    }
    fn category(&self) -> Category {
        Category::System
    }
    fn completes_files(&self) -> bool {
        true
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<Vec<String>> {
        let file = args.first().map(|f| f.to_lowercase()).unwrap_or_default();
        if file.is_empty() {
            return Ok(lines(&["usage: cat <filename>", "try: cat about.txt", ""]));
        }
        let (files, registry) = (env.files, env.registry);
        let Some(command) = files.resolve(&file) else {
            return Ok(vec![format!("cat: {file}: no such file"), String::new()]);
        };
        match registry.resolve(command) {
            Some(target) => target.execute(&[], env),
            None => Ok(vec![
                format!("cat: {file}: mapped command '{command}' not found"),
                String::new(),
            ]),
        }
    }
}

// ---------------------------------------------------------------------------
// open
// ---------------------------------------------------------------------------

struct OpenCmd;
impl Command for OpenCmd {
    fn name(&self) -> &str {
        "open"
    }
    fn description(&self) -> &str {
        "open a virtual file in the viewer"
    }
    fn usage(&self) -> &str {
        "open <filename>"
    }
    fn category(&self) -> Category {
        Category::System
    }
    fn completes_files(&self) -> bool {
        true
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<Vec<String>> {
        let file = args.first().map(|f| f.to_lowercase()).unwrap_or_default();
        if file.is_empty() {
            return Ok(lines(&["usage: open <filename>", "try: open about.txt", ""]));
        }
        let (files, registry) = (env.files, env.registry);
        let Some(command) = files.resolve(&file) else {
            return Ok(vec![format!("open: {file}: no such file"), String::new()]);
        };
        let content = match registry.resolve(command) {
            Some(target) => target.execute(&[], env)?,
            None => vec![format!("Error: {file} not found in virtual filesystem.")],
        };
        env.open_content(&file, &content);
        Ok(vec![format!("opened {file}"), String::new()])
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "clear the screen"
    }
    fn category(&self) -> Category {
        Category::System
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<Vec<String>> {
        env.clear_output();
        Ok(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "close the terminal"
    }
    fn category(&self) -> Category {
        Category::System
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<Vec<String>> {
        let delay = Duration::from_millis(env.config.exit_close_delay_ms);
        env.defer(delay, Deferred::ClosePanel(TERMINAL_PANEL.to_string()));
        Ok(lines(&["logout", "connection closed.", ""]))
    }
}

// ---------------------------------------------------------------------------
// Easter eggs
// ---------------------------------------------------------------------------

struct SudoCmd;
impl Command for SudoCmd {
    fn name(&self) -> &str {
        "sudo"
    }
    fn description(&self) -> &str {
        "execute a command as superuser (not really)"
    }
    fn category(&self) -> Category {
        Category::Hidden
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<Vec<String>> {
        Ok(lines(&[
            "You dont have sudo privileges here.",
            "This will be reported to the system administrator.",
            "",
        ]))
    }
}

struct VimCmd;
impl Command for VimCmd {
    fn name(&self) -> &str {
        "vim"
    }
    fn description(&self) -> &str {
        "opens vim (allegedly)"
    }
    fn category(&self) -> Category {
        Category::Hidden
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<Vec<String>> {
        Ok(lines(&[
            "vim?",
            "really??",
            "",
            "no... I dont think so. Try nano instead.",
            "",
        ]))
    }
}

struct NanoCmd;
impl Command for NanoCmd {
    fn name(&self) -> &str {
        "nano"
    }
    fn description(&self) -> &str {
        "opens nano (not really)"
    }
    fn category(&self) -> Category {
        Category::Hidden
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<Vec<String>> {
        Ok(lines(&[
            "nano?",
            "still no...",
            "",
            "this is only a portfolio website :)",
            "",
        ]))
    }
}
