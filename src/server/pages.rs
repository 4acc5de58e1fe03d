use crate::server::state::AppState;
use crate::utils::constants::{API_PREFIX, PRECIPITATION_ROUTE, STATIONS_ROUTE, TOBS_ROUTE};
use crate::utils::dates::format_date;

/// Index page listing the API routes, with the dataset's bounds filled in.
pub fn render_index(state: &AppState) -> String {
    let dataset = &state.dataset;
    let base = &state.public_url;
    let first = format_date(dataset.first_date());
    let last = format_date(dataset.last_date());
    let start = format_date(dataset.start_date());
    let indent = "&nbsp;&nbsp;&nbsp;&nbsp;";

    let mut html = String::new();
    html.push_str("The following links can be used to get data dumps<br/>");
    html.push_str("<ul>");
    html.push_str(&link(base, PRECIPITATION_ROUTE));
    html.push_str(&format!(
        "{indent}Returns a json of all the station precipitation averages by date<br/>"
    ));
    html.push_str(&link(base, STATIONS_ROUTE));
    html.push_str(&format!(
        "{indent}Returns a json that provides the station id, station name, elevation, lat and long of each station<br/>"
    ));
    html.push_str(&link(base, TOBS_ROUTE));
    html.push_str(&format!(
        "{indent}Returns a json of all the station observed temps between {start} and {last}.<br/>"
    ));
    html.push_str("</ul>");
    html.push_str("<br/>");
    html.push_str("The following require user to include dates<br/>");
    html.push_str(&format!(
        "{indent}Enter the date in the following format YYYY-MM-DD.  Example: {API_PREFIX}/{first}<br/>"
    ));
    html.push_str(&format!(
        "{indent}{indent}Only supports dates between {first} and {last}<br/>"
    ));
    html.push_str("<ul>");
    html.push_str(&format!("<li>{API_PREFIX}/start date</li>"));
    html.push_str(&format!(
        "{indent}Returns the min, max and average observed temp between the start date and {last}.<br/>"
    ));
    html.push_str(&format!("<li>{API_PREFIX}/start date/end date</li>"));
    html.push_str(&format!(
        "{indent}Returns the min, max and average observed temp between the start date and end date.<br/>"
    ));
    html.push_str("</ul>");
    html
}

fn link(base: &str, route: &str) -> String {
    format!("<li><a href=\"{base}{route}\" target=\"_blank\">{route}</a></li>")
}
