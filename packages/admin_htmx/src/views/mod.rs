use maud::{DOCTYPE, Markup, html};

pub mod users;

pub fn page(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) " - UserBox" }
                style {("
                    table { border-collapse: collapse; }
                    th, td { padding: 0.25em 0.75em; text-align: left; }
                    .field { margin-bottom: 0.75em; }
                    .field-error { color: #b00020; display: block; }
                    .actions a { margin-right: 0.5em; }
                ")}
                script
                    src="https://unpkg.com/htmx.org@2.0.2"
                    integrity="sha384-Y7hw+L/jvKeWIRRkqWYfPcvVxHzVzn5REgzbawhxAuQGwX1XWe70vji+VSeHOThJ"
                    crossorigin="anonymous"
                    {}
            }
            body hx-boost="true" {
                h1 { "UserBox" }
                hr {}
                h2 { (title) }
                (content)
            }
        }
    }
}
