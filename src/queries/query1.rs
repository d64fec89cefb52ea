//! Query 1 — summary of one airport: identity plus reserved passenger
//! traffic. Pure lookup, no private index.

use std::io::{self, Write};

use crate::dataset::Dataset;
use crate::queries::{Separator, write_empty};

pub(crate) fn run(
    dataset: &Dataset,
    arg: Option<&str>,
    separator: Separator,
    out: &mut dyn Write,
) -> io::Result<()> {
    let Some(code) = arg.filter(|s| !s.is_empty()) else {
        return write_empty(out);
    };
    let Some(airport) = dataset.airport(code) else {
        return write_empty(out);
    };
    // No traffic entry just means nobody reserved a live flight through here.
    let traffic = dataset.traffic(code).unwrap_or_default();

    let sep = separator.as_char();
    writeln!(
        out,
        "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
        airport.code,
        airport.name,
        airport.city,
        airport.country,
        airport.airport_type,
        traffic.arrivals,
        traffic.departures,
    )
}
