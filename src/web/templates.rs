//! HTML templates for the web viewer. Rendering goes through minijinja with HTML
//! auto-escaping (all template names end in `.html`).

use crate::error::AppError;
use crate::render::TableView;
use minijinja::{context, Environment};

const MASTER_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
	<title>{{ title }} - sdbcli</title>
</head>
<body>
	{% block content %}{% endblock %}
</body>
</html>
"#;

const ERROR_HTML: &str = r#"{% extends "master.html" %}
{% block content %}
	<h2 style="color: red;">{{ data }}</h2>
{% endblock %}
"#;

const DOMAIN_LIST_HTML: &str = r#"{% extends "master.html" %}
{% block content %}
	<h2>{{ title }}</h2>
	{% if data %}
		{% for name in data %}
		<a href="domain/{{ name }}">{{ name }}</a><br>
		{% endfor %}
	{% else %}
	<strong>No domains available</strong>
	{% endif %}
{% endblock %}
"#;

const ITEMS_HTML: &str = r#"{% extends "master.html" %}
{% block content %}
	<h2>{{ title }}</h2>
	{% if data.rows %}
		<table>
		<tr>
		{% for column in data.columns %}
			<th>{{ column.header }}</th>
		{% endfor %}
		</tr>
		{% for row in data.rows %}
			<tr>
			<td>{{ row.name }}</td>
			{% for cell in row.cells %}
				<td>{{ cell }}</td>
			{% endfor %}
			</tr>
		{% endfor %}
		</table>
	{% else %}
	<strong>No items in domain</strong>
	{% endif %}
{% endblock %}
"#;

pub const DOMAIN_LIST_TITLE: &str = "Available domains";
pub const ERROR_TITLE: &str = "Error occures";

/// Compiled template set, read-only after construction.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.add_template("master.html", MASTER_HTML)?;
        env.add_template("error.html", ERROR_HTML)?;
        env.add_template("domain_list.html", DOMAIN_LIST_HTML)?;
        env.add_template("items.html", ITEMS_HTML)?;
        Ok(Self { env })
    }

    pub fn render_domain_list(&self, domains: &[String]) -> Result<String, AppError> {
        let template = self.env.get_template("domain_list.html")?;
        Ok(template.render(context! { title => DOMAIN_LIST_TITLE, data => domains })?)
    }

    pub fn render_items(&self, domain: &str, view: &TableView) -> Result<String, AppError> {
        let template = self.env.get_template("items.html")?;
        let title = format!("Items for domain: {}", domain);
        Ok(template.render(context! { title => title, data => view })?)
    }

    pub fn render_error(&self, message: &str) -> Result<String, AppError> {
        let template = self.env.get_template("error.html")?;
        Ok(template.render(context! { title => ERROR_TITLE, data => message })?)
    }
}
