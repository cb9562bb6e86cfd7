//! Window Example - two overlapping windows on a 100x40 screen
//!
//! This example demonstrates:
//! - Creating a screen and windows
//! - Setting content from lines and from text
//! - Clipping of long lines and surplus rows
//! - Stacking order (the window attached last is drawn on top)
//!
//! Run with: cargo run --example window
//! Log attach/detach with: RUST_LOG=debug cargo run --example window

use ascii_compositor::{Compositor, Coord, Screen, TerminalSink, Window};
use tracing_subscriber::EnvFilter;

const SCREEN_WIDTH: i32 = 100;
const SCREEN_HEIGHT: i32 = 40;

fn main() -> ascii_compositor::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut compositor = Compositor::new();
    let screen = compositor.add_screen(Screen::new(SCREEN_WIDTH, SCREEN_HEIGHT)?);

    // X: columns from the left, Y: rows from the top, (0, 0) is top-left
    let mut window = Window::new(Coord::new(5, 10), 20, 10)?;

    // Consecutive elements are consecutive lines...
    window.set_content(["overwritten", "by string", "anyway... "]);
    // ...or use '\n' for a new line. Long lines and extra rows are cut off.
    window.set_text(concat!(
        "+------------------+\n",
        "01234567890123456789\n",
        "    THIS IS THE\n",
        "   WINDOW EXAMPLE!!\n",
        "see how long string\n",
        "is sliced: \n",
        "he1-he2-he3-he4-he5-he6-he7-he8-he9-he10\n",
        "it was 10 he-s. \n",
        "+------------------+\n",
    ))?;
    let window = compositor.add_window(window);
    compositor.attach(screen, window)?;

    let mut top = Window::new(Coord::new(13, 17), 15, 10)?;
    top.set_text(concat!(
        "###############\n",
        "# This Window #\n",
        "# is on top   #\n",
        "# you see.    #\n",
        "#             #\n",
        "#             #\n",
        "#             #\n",
        "#             #\n",
        "#             #\n",
        "###############\n",
    ))?;
    let top = compositor.add_window(top);
    compositor.attach(screen, top)?;

    let mut sink = TerminalSink::stdout();
    compositor.update(screen, &mut sink)?;

    // Detached windows can be attached again later; they come back on top.
    compositor.detach(screen, window)?;

    Ok(())
}
