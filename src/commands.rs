//! Logic behind the `hotkey` subcommands
//!
//! Each command returns its results instead of printing them; the binary
//! decides how to render them.

use anyhow::{bail, Context, Result};
use tokio::sync::{broadcast, mpsc};
use tracing::info;

use crate::events::BindingEvent;
use crate::input::KeyInput;
use crate::keymap::{Dispatcher, Keymap};
use crate::keys::Hotkey;
use crate::platform::Platform;

/// One input of the `parse` command and what it parsed to
#[derive(Debug, Clone)]
pub struct ParsedInput {
    /// Input as given
    pub text: String,
    /// Parsed hotkey, `None` if the text is not a hotkey
    pub hotkey: Option<Hotkey>,
}

impl ParsedInput {
    /// One line summary, labels formatted for `platform`
    pub fn describe(&self, platform: Platform) -> String {
        match &self.hotkey {
            Some(hotkey) => format!(
                "{:?}: canonical={:?} display={:?} valid={}",
                self.text,
                hotkey.to_canonical_string(),
                hotkey.display_string_for(platform),
                hotkey.is_valid()
            ),
            None => format!("{:?}: not a hotkey", self.text),
        }
    }
}

/// Parse every input, keeping failures alongside successes
pub fn parse_inputs<S: AsRef<str>>(texts: &[S]) -> Vec<ParsedInput> {
    texts
        .iter()
        .map(|text| ParsedInput {
            text: text.as_ref().to_string(),
            hotkey: Hotkey::try_parse(text.as_ref()),
        })
        .collect()
}

/// Fail if any input did not parse
pub fn ensure_all_parsed(parsed: &[ParsedInput]) -> Result<()> {
    let failed = parsed.iter().filter(|p| p.hotkey.is_none()).count();
    if failed > 0 {
        bail!("{} of {} inputs could not be parsed", failed, parsed.len());
    }
    Ok(())
}

/// Split an `ACTION=HOTKEY` argument at the first `=`
pub fn parse_binding(binding: &str) -> Result<(&str, &str)> {
    binding
        .split_once('=')
        .with_context(|| format!("binding '{}' is not ACTION=HOTKEY", binding))
}

/// Events produced by feeding presses through a dispatcher
#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    /// One event per press, in press order
    pub events: Vec<BindingEvent>,
}

impl MatchReport {
    /// Number of presses that triggered an action
    pub fn triggered(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, BindingEvent::Triggered { .. }))
            .count()
    }

    /// One `"<label> -> <action>"` line per event
    pub fn lines(&self, platform: Platform) -> Vec<String> {
        self.events
            .iter()
            .map(|event| match event {
                BindingEvent::Triggered { action, hotkey } => {
                    format!("{} -> {}", hotkey.display_string_for(platform), action)
                }
                BindingEvent::Unmatched { hotkey } => {
                    format!("{} -> (unbound)", hotkey.display_string_for(platform))
                }
            })
            .collect()
    }

    /// One JSON object per event
    pub fn json_lines(&self) -> Result<Vec<String>> {
        self.events
            .iter()
            .map(|event| serde_json::to_string(event).context("failed to encode event"))
            .collect()
    }
}

/// Resolve `presses` against `bindings` through a [`Dispatcher`]
///
/// Bindings must be `ACTION=HOTKEY`; presses must parse as hotkeys. Both
/// are validated before anything is dispatched.
pub async fn match_presses<S: AsRef<str>>(
    bindings: &[S],
    presses: &[S],
    channel_capacity: usize,
) -> Result<MatchReport> {
    let pairs = bindings
        .iter()
        .map(|binding| parse_binding(binding.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let keymap = Keymap::from_pairs(pairs);

    let inputs = presses
        .iter()
        .map(|press| {
            let press = press.as_ref();
            Hotkey::try_parse(press)
                .map(|hotkey| KeyInput::down(hotkey.key, hotkey.modifiers))
                .with_context(|| format!("press '{}' is not a hotkey", press))
        })
        .collect::<Result<Vec<_>>>()?;

    let (input_tx, input_rx) = mpsc::channel(channel_capacity.max(1));
    let (event_tx, mut event_rx) = broadcast::channel::<BindingEvent>(inputs.len().max(1));

    let mut dispatcher = Dispatcher::new(keymap, event_tx);
    let worker = tokio::spawn(async move { dispatcher.run(input_rx).await });

    for input in inputs {
        input_tx
            .send(input)
            .await
            .context("dispatcher stopped early")?;
    }
    drop(input_tx);
    worker.await.context("dispatcher task failed")?;

    let mut report = MatchReport::default();
    while let Ok(event) = event_rx.try_recv() {
        report.events.push(event);
    }

    info!(
        triggered = report.triggered(),
        presses = presses.len(),
        "matching complete"
    );
    Ok(report)
}
