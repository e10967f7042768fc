//! Scripted input.
//!
//! One step per line, `#` starts a comment:
//!
//! ```text
//! on anim        # turn_on, animated
//! off            # turn_off, immediate
//! toggle anim
//! tap            # press + release on the knob
//! drag 0 80      # drag the knob from 0 % to 80 % of its travel
//! wait 250       # let animations run for 250 ms
//! knob-on assets/on.png
//! knob-off assets/off.png
//! clear-knob
//! ```

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    On { animate: bool },
    Off { animate: bool },
    Toggle { animate: bool },
    Tap,
    /// Positions are percentages of the knob's travel.
    Drag { from: f32, to: f32 },
    Wait(Duration),
    KnobOn(String),
    KnobOff(String),
    ClearKnob,
}

pub const DEFAULT_SCRIPT: &str = "\
# Fallback demo when no script is given.
knob-on assets/knob-on.png
toggle anim
wait 250
tap
wait 250
drag 0 70
wait 250
off
";

fn parse_animate(arg: Option<&str>) -> Result<bool> {
    match arg {
        None => Ok(false),
        Some("anim") => Ok(true),
        Some(other) => bail!("expected `anim`, got `{}`", other),
    }
}

fn parse_percent(arg: Option<&str>) -> Result<f32> {
    let text = arg.ok_or_else(|| anyhow!("missing percentage"))?;
    let pct: f32 = text
        .parse()
        .with_context(|| format!("`{}` is not a number", text))?;
    if !(0.0..=100.0).contains(&pct) {
        bail!("{} is outside 0..=100", pct);
    }
    Ok(pct)
}

fn parse_line(line: &str) -> Result<Step> {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        bail!("empty step");
    };
    let step = match cmd {
        "on" => Step::On { animate: parse_animate(words.next())? },
        "off" => Step::Off { animate: parse_animate(words.next())? },
        "toggle" => Step::Toggle { animate: parse_animate(words.next())? },
        "tap" => Step::Tap,
        "drag" => Step::Drag {
            from: parse_percent(words.next())?,
            to: parse_percent(words.next())?,
        },
        "wait" => {
            let text = words.next().ok_or_else(|| anyhow!("missing duration"))?;
            let ms: u64 = text
                .parse()
                .with_context(|| format!("`{}` is not a millisecond count", text))?;
            Step::Wait(Duration::from_millis(ms))
        }
        "knob-on" => Step::KnobOn(words.next().ok_or_else(|| anyhow!("missing path"))?.to_string()),
        "knob-off" => Step::KnobOff(words.next().ok_or_else(|| anyhow!("missing path"))?.to_string()),
        "clear-knob" => Step::ClearKnob,
        other => bail!("unknown step `{}`", other),
    };
    if let Some(extra) = words.next() {
        bail!("unexpected `{}`", extra);
    }
    Ok(step)
}

pub fn parse(text: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (n, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let step = parse_line(line).with_context(|| format!("line {}: `{}`", n + 1, line))?;
        steps.push(step);
    }
    Ok(steps)
}
