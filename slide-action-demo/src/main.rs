mod host;
mod output;

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use parking_lot::Mutex;
use slide_action::{
    Density, ImageContent, Px, PxSize, SlideAction, SlideActionArgs, SliderSide, TouchEvent,
};

use crate::host::DemoHost;

#[derive(Parser)]
#[command(name = "slide-action-demo")]
#[command(version, about = "Plays scripted gestures on a slide-to-confirm track", long_about = None)]
struct Cli {
    /// Which gesture script to play
    #[arg(value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,
    /// Track width in pixels
    #[arg(long, default_value_t = 300)]
    width: i32,
    /// Track height in pixels
    #[arg(long, default_value_t = 100)]
    height: i32,
    /// Physical pixels per dp
    #[arg(long, default_value_t = 1.0)]
    density: f64,
    /// Settle completed sliders at the far edge instead of the center
    #[arg(long)]
    edge: bool,
    /// Simulated frame interval in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    /// Enable the widget's diagnostic logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Scenario {
    /// Slide the left slider all the way across
    Left,
    /// Slide the right slider all the way across
    Right,
    /// Drag a few pixels and let go
    Abort,
    /// Complete, then reset to rest
    Reset,
    /// Every script in turn
    All,
}

impl Scenario {
    fn scripts(self) -> &'static [Scenario] {
        match self {
            Scenario::All => &[
                Scenario::Left,
                Scenario::Right,
                Scenario::Abort,
                Scenario::Reset,
            ],
            Scenario::Left => &[Scenario::Left],
            Scenario::Right => &[Scenario::Right],
            Scenario::Abort => &[Scenario::Abort],
            Scenario::Reset => &[Scenario::Reset],
        }
    }
}

fn init_tracing(debug: bool) {
    let fallback = if debug {
        "warn,slide_action=debug,slide_action_demo=debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

type CompletionLog = Arc<Mutex<Vec<SliderSide>>>;

fn build_widget(cli: &Cli, log: &CompletionLog) -> Result<SlideAction> {
    let knob = ImageContent::new("knob").with_intrinsic_size(Px(50), Px(50));
    let left_log = log.clone();
    let right_log = log.clone();
    let args = SlideActionArgs::default()
        .background(ImageContent::new("track"))
        .left_slider(knob.clone())
        .right_slider(knob)
        .description("slide to answer")
        .left_description("answer")
        .right_description("decline")
        .complete_to_center(!cli.edge)
        .density(Density(cli.density))
        .debug(cli.debug)
        .on_left_complete(move || left_log.lock().push(SliderSide::Left))
        .on_right_complete(move || right_log.lock().push(SliderSide::Right));
    let mut widget = SlideAction::new(args).context("invalid track configuration")?;
    widget.layout(PxSize::new(Px(cli.width), Px(cli.height)));
    Ok(widget)
}

/// Touch-down on the slider's center, a few intermediate moves, then the
/// release at `to_x`.
fn swipe(widget: &mut SlideAction, host: &mut DemoHost, side: SliderSide, to_x: i32) -> bool {
    let rest = widget.slider(side).rest();
    let (x, y) = (rest.center_x().0, rest.center_y().0);
    if !widget.handle_touch(TouchEvent::down(x, y), host) {
        return false;
    }
    output::step(format!(
        "grabbed {side} slider at ({x}, {y}), capture {}",
        host.exclusive()
    ));
    for i in 1..=4 {
        let step_x = x + (to_x - x) * i / 4;
        widget.handle_touch(TouchEvent::moved(step_x, y), host);
    }
    widget.handle_touch(TouchEvent::up(to_x, y), host)
}

fn report(widget: &SlideAction, host: &DemoHost) {
    output::status("state", output::state(widget.state()));
    for command in widget.draw_commands().iter() {
        output::draw_command(command);
    }
    output::step(format!("{} frames applied so far", host.frames_applied()));
}

fn play(scenario: Scenario, cli: &Cli) -> Result<()> {
    let log = CompletionLog::default();
    let mut widget = build_widget(cli, &log)?;
    let mut host = DemoHost::new(Duration::from_millis(cli.frame_ms.max(1)));
    let area = widget.content_area().rect();

    output::status("scenario", format!("{scenario:?}").to_lowercase());
    match scenario {
        Scenario::Left => {
            swipe(&mut widget, &mut host, SliderSide::Left, area.right.0);
        }
        Scenario::Right => {
            swipe(&mut widget, &mut host, SliderSide::Right, area.left.0);
        }
        Scenario::Abort => {
            let rest = widget.slider(SliderSide::Left).rest();
            swipe(&mut widget, &mut host, SliderSide::Left, rest.center_x().0 + 5);
        }
        Scenario::Reset => {
            swipe(&mut widget, &mut host, SliderSide::Left, area.right.0);
            let elapsed = host.settle(&mut widget);
            output::step(format!("settled after {} ms", elapsed.as_millis()));
            report(&widget, &host);
            widget.reset(&mut host);
        }
        Scenario::All => bail!("`all` is not a single script"),
    }

    let elapsed = host.settle(&mut widget);
    output::step(format!("settled after {} ms", elapsed.as_millis()));
    if host.take_layout_request() {
        widget.layout(widget.size());
    }
    report(&widget, &host);

    let completions = log.lock();
    if completions.is_empty() {
        output::note("no action confirmed");
    } else {
        for side in completions.iter() {
            output::status("confirmed", format!("{side} action"));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    if cli.width <= 0 || cli.height <= 0 {
        bail!("track size must be positive, got {}x{}", cli.width, cli.height);
    }

    for scenario in cli.scenario.scripts() {
        play(*scenario, &cli)?;
    }
    Ok(())
}
