//! Interactive prompt loop.
//!
//! Every rejected input is reported and asked for again; nothing here
//! aborts the session except end of input or the `0` sentinel.

use cityradius_core::{check_radius, Metric, PointStore, QueryError, QueryResult, RadiusSearch};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Entered at the city prompt to end the session.
pub const EXIT_SENTINEL: &str = "0";

const CITY_PROMPT: &str = "Enter a city name (0 to quit):";
const RADIUS_PROMPT: &str = "Enter a radius:";
const METRIC_PROMPT: &str = "Enter a metric (0 euclidean, 1 chebyshev, 2 manhattan):";

pub struct Session<'a, R, W> {
    store: &'a PointStore,
    input: R,
    output: W,
    line: String,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a PointStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            line: String::new(),
        }
    }

    /// Runs until the sentinel is entered or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        while let Some(city) = self.ask_city()? {
            let Some(radius) = self.ask_radius()? else { break };
            let Some(metric) = self.ask_metric()? else { break };

            writeln!(self.output, "Searching around {city}, radius {radius}, {metric}")?;
            match self.store.search_nearby(&city, radius, metric) {
                Ok(res) => write_result(&mut self.output, &res)?,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
        self.output.flush()
    }

    fn ask_city(&mut self) -> io::Result<Option<String>> {
        loop {
            let Some(name) = self.ask(CITY_PROMPT)? else { return Ok(None) };
            if name == EXIT_SENTINEL {
                return Ok(None);
            }
            if self.store.contains(&name) {
                return Ok(Some(name));
            }
            let hint = self.store.suggest(&name).map(|c| c.name.clone());
            self.reject(&QueryError::CityNotFound(name))?;
            if let Some(hint) = hint {
                writeln!(self.output, "Did you mean {hint}?")?;
            }
        }
    }

    fn ask_radius(&mut self) -> io::Result<Option<f64>> {
        self.ask_parsed(RADIUS_PROMPT, |raw| {
            let radius = raw
                .parse::<f64>()
                .map_err(|_| QueryError::UnparsableRadius(raw.to_string()))?;
            check_radius(radius)
        })
    }

    fn ask_metric(&mut self) -> io::Result<Option<Metric>> {
        self.ask_parsed(METRIC_PROMPT, Metric::from_str)
    }

    /// Re-prompts until `parse` accepts the input.
    fn ask_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, QueryError>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(raw) = self.ask(prompt)? else { return Ok(None) };
            match parse(raw.trim()) {
                Ok(v) => return Ok(Some(v)),
                Err(e) => self.reject(&e)?,
            }
        }
    }

    /// Prints the prompt and reads one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn reject(&mut self, err: &QueryError) -> io::Result<()> {
        writeln!(self.output, "Invalid input: {err}, try again!")
    }
}

/// Human-readable result listing, shared by the prompt loop and the
/// `query` subcommand.
pub fn write_result<W: Write>(out: &mut W, res: &QueryResult) -> io::Result<()> {
    writeln!(out, "Found cities: {}", res.total_found)?;
    writeln!(out, "Cities to the east: {}", res.east_count)?;
    writeln!(out, "City list:")?;
    for n in res {
        writeln!(out, "  {} ({})", n.name, n.distance)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PointStore {
        let data = "A\n0 , 0\nB\n3 , 0\nC\n0 , 4\nD\n3 , 4\n";
        PointStore::load_from_reader(data.as_bytes()).unwrap()
    }

    fn run(input: &str) -> String {
        let store = store();
        let mut out = Vec::new();
        Session::new(&store, input.as_bytes(), &mut out).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn single_query_then_exit() {
        let out = run("A\n5\n0\n0\n");
        assert!(out.contains("Searching around A, radius 5, euclidean"));
        assert!(out.contains("Found cities: 3\nCities to the east: 2\nCity list:\n  B (3)\n  C (4)\n  D (5)\n"));
        assert!(out.trim_end().ends_with(CITY_PROMPT));
    }

    #[test]
    fn unknown_city_is_asked_again() {
        let out = run("Z\nB\n4\nchebyshev\n0\n");
        assert!(out.contains("Invalid input: city not found: Z, try again!"));
        assert!(out.contains("Found cities: 3"));
        assert!(out.contains("Cities to the east: 0"));
    }

    #[test]
    fn bad_radius_and_metric_are_asked_again() {
        let out = run("A\n-1\nfar\n3\n7\n1\n");
        assert!(out.contains("radius must be a non-negative number, got -1"));
        assert!(out.contains("Invalid input: radius must be a number, got \"far\", try again!"));
        assert!(out.contains("got 7"));
        assert!(out.contains("Found cities: 1\nCities to the east: 1\nCity list:\n  B (3)\n"));
    }

    #[test]
    fn unknown_metric_name_is_echoed() {
        let out = run("A\n5\ncosine\nl1\n0\n");
        assert!(out.contains("Invalid input: unknown metric \"cosine\", try again!"));
        assert!(out.contains("Searching around A, radius 5, manhattan"));
    }

    #[test]
    fn near_miss_city_gets_a_hint() {
        let out = run("a\nA\n3\n0\n0\n");
        assert!(out.contains("Invalid input: city not found: a, try again!\nDid you mean A?\n"));
        assert!(out.contains("Found cities: 1"));
    }

    #[test]
    fn end_of_input_mid_query_is_clean() {
        let out = run("A\n5\n");
        assert!(out.ends_with(&format!("{METRIC_PROMPT}\n")));
        assert!(!out.contains("Found cities"));
    }

    #[test]
    fn empty_result_is_listed() {
        let out = run("A\n0\n2\n0\n");
        assert!(out.contains("Found cities: 0\nCities to the east: 0\nCity list:\n"));
    }
}
