//! Line-oriented editing session.
//!
//! Each line on stdin is one change to the form, written `PATH VALUE` or
//! `PATH=VALUE`. The form recomputes after every change and the new total is
//! printed before the next line is read. `show` prints the full report,
//! `reset` restores the configured defaults and `quit` ends the session.
//! A bad line is reported and skipped.

use std::io::{self, BufRead, Write};

use indexmap::IndexMap;
use sprintpoints_core::{split_edit, Config, PlatformProfile, SprintForm, SprintReport};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut form = SprintForm::from_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut session = Session {
        form: &mut form,
        profiles: &config.platforms,
        json,
        show_capacity: config.output.show_capacity,
    };
    session.run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())?;
    Ok(())
}

pub struct Session<'a> {
    pub form: &'a mut SprintForm,
    pub profiles: &'a IndexMap<String, PlatformProfile>,
    pub json: bool,
    pub show_capacity: bool,
}

impl Session<'_> {
    pub fn run<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line {
                "quit" | "exit" => break,
                "show" => self.print_report(out)?,
                "reset" => {
                    self.form.reset();
                    self.print_update(out, "reset")?;
                }
                edit => {
                    let applied = split_edit(edit)
                        .and_then(|(path, raw)| self.form.apply_edit(path, raw).map(|v| (path, v)));
                    match applied {
                        Ok((path, value)) => self.print_update(out, &format!("{path} = {value}"))?,
                        Err(e) => {
                            tracing::debug!(line = edit, error = %e, "rejected session edit");
                            writeln!(err, "error: {e}")?;
                        }
                    }
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    fn print_update<W: Write>(&self, out: &mut W, change: &str) -> io::Result<()> {
        if self.json {
            return self.print_report(out);
        }
        writeln!(
            out,
            "{change}  total: {}",
            self.form.summary().total_story_points
        )
    }

    fn print_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let report = SprintReport::new(&*self.form, self.profiles);
        if self.json {
            let json = serde_json::to_string(&report).map_err(io::Error::other)?;
            writeln!(out, "{json}")
        } else {
            write!(out, "{}", report.render_table(self.show_capacity))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_lines(input: &str, json: bool) -> (String, String) {
        let config = Config::default();
        let mut form = SprintForm::from_config(&config).unwrap();
        let mut session = Session {
            form: &mut form,
            profiles: &config.platforms,
            json,
            show_capacity: true,
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        session.run(Cursor::new(input), &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn prints_total_after_each_edit() {
        let (out, err) = run_lines("sprint.holiday_days 2\nweb.engineers=0\n", false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec!["sprint.holiday_days = 2  total: 102", "web.engineers = 0  total: 70"]
        );
        assert!(err.is_empty());
    }

    #[test]
    fn bad_lines_are_reported_and_skipped() {
        let (out, err) = run_lines("desktop.engineers 3\nnonsense\nios.leave_days 70\n", false);
        assert_eq!(out.trim(), "ios.leave_days = 70  total: 80");
        assert!(err.contains("unknown platform: desktop"));
        assert!(err.contains("malformed edit: nonsense"));
    }

    #[test]
    fn reset_and_quit() {
        let (out, _) = run_lines("web.engineers 1\nreset\nquit\nweb.engineers 9\n", false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["web.engineers = 1  total: 96", "reset  total: 128"]);
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let (out, err) = run_lines("# planning\n\n   \nsprint.business_days -2\n", false);
        assert_eq!(out.trim(), "sprint.business_days = 1  total: 128");
        assert!(err.is_empty());
    }

    #[test]
    fn show_prints_table() {
        let (out, _) = run_lines("show\n", false);
        assert!(out.contains("Sprint Story Points"));
        assert!(out.contains("Android"));
    }

    #[test]
    fn json_mode_prints_one_report_per_edit() {
        let (out, _) = run_lines("android.leave_days 10\nios.engineers 0\n", true);
        let reports: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["summary"]["total_story_points"], 120);
        assert_eq!(reports[1]["summary"]["total_story_points"], 72);
    }
}
