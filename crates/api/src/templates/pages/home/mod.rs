use maud::{html, Markup};

use crate::templates::layouts::{base, PageConfig};

/// A route advertised on the welcome page. Only parameterless routes are linked.
struct RouteInfo {
    path: &'static str,
    description: &'static str,
    linked: bool,
}

const ROUTES: &[RouteInfo] = &[
    RouteInfo {
        path: "/api/v1.0/precipitation",
        description: "Precipitation by date for the last year of data",
        linked: true,
    },
    RouteInfo {
        path: "/api/v1.0/stations",
        description: "All weather station identifiers",
        linked: true,
    },
    RouteInfo {
        path: "/api/v1.0/tobs",
        description: "Temperature observations of the most active station for the last year of data",
        linked: true,
    },
    RouteInfo {
        path: "/api/v1.0/<start>",
        description: "Min, average and max temperature from a YYYY-MM-DD start date on",
        linked: false,
    },
    RouteInfo {
        path: "/api/v1.0/<start>/<end>",
        description: "Min, average and max temperature between two YYYY-MM-DD dates, inclusive",
        linked: false,
    },
];

pub fn home_page(api_base: &str) -> Markup {
    let config = PageConfig {
        title: "Hawaii Climate Analysis API",
        api_base,
    };

    base(&config, content(api_base))
}

fn content(api_base: &str) -> Markup {
    html! {
        p class="subtitle" { "Welcome to the Hawaii Climate Analysis API!" }
        h2 class="title is-5" { "Available Routes:" }
        div class="table-container" {
            table class="table is-fullwidth is-striped" {
                thead {
                    tr {
                        th { "Route" }
                        th { "Description" }
                    }
                }
                tbody {
                    @for route in ROUTES {
                        tr {
                            td {
                                @if route.linked {
                                    a href={ (api_base) (route.path) } { code { (route.path) } }
                                } @else {
                                    code { (route.path) }
                                }
                            }
                            td { (route.description) }
                        }
                    }
                }
            }
        }
    }
}
