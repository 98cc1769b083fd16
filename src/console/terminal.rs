use super::Console;
use dialoguer::Input;

/// Interactive console on the attached terminal.
#[derive(Debug, Default)]
pub struct Terminal;

impl Console for Terminal {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text()
        {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
    fn say(&mut self, text: &str) -> anyhow::Result<()> {
        println!("{}", text);
        Ok(())
    }
}
