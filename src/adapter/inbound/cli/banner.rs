//! ASCII art banner for interactive mode.

use std::io::IsTerminal;

/// ANSI true-color escape sequences for the banner palette.
struct Colors {
    up: &'static str,
    down: &'static str,
    axis: &'static str,
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    up: "\x1b[38;2;214;69;65m",
    down: "\x1b[38;2;66;133;244m",
    axis: "\x1b[38;2;100;100;120m",
    title: "\x1b[1;38;2;240;200;120m",
    subtitle: "\x1b[38;2;100;100;120m",
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    up: "",
    down: "",
    axis: "",
    title: "",
    subtitle: "",
    reset: "",
};

/// Prints the banner to stdout.
///
/// Renders ANSI true-color when stdout is a terminal,
/// falls back to plain text otherwise.
pub fn print_banner() {
    let c = if std::io::stdout().is_terminal() {
        &COLOR
    } else {
        &PLAIN
    };

    let up = c.up;
    let dn = c.down;
    let ax = c.axis;
    let tt = c.title;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{ax}  │{r}          {up}▄{r}
{ax}  │{r}     {up}▄{r}   {up}█{r} {dn}▄{r}        {tt}MARKET NOTIFIER{r}
{ax}  │{r}   {dn}▄{r} {up}█{r} {dn}█{r} {up}█{r} {dn}█{r}        {st}FX · oil · fuel · gold, on the bell{r}
{ax}  │{r}   {dn}█{r} {up}█{r} {dn}█{r} {up}█{r} {dn}█{r}
{ax}  └──────────────{r}
"#
    );
}
