//! Test fixtures - reusable content constants for tests.

/// The landing page template
pub const INDEX_PAGE: &str = "<html><head><title>{{title}}</title></head><body></body></html>\n";

/// A secondary page template
pub const ABOUT_PAGE: &str = "<html><head><title>{{site}}</title></head><body></body></html>\n";

/// Shared global context
pub const GLOBAL_CONTEXT: &str = r#"{
  "site": "Acme",
  "title": "Acme - Home of Widgets"
}
"#;

/// Page-specific context for the landing page (overrides title)
pub const INDEX_CONTEXT: &str = r#"{
  "title": "Welcome"
}
"#;

/// Local environment file with both credential families
pub const ENV_LOCAL: &str = "\
# deploy credentials (untracked)
FTP_DEMO_HOST=demo.example.invalid
FTP_DEMO_USER=demo-user
FTP_DEMO_PASSWORD=demo-pass
FTP_DEMO_DEST=/var/www/demo
FTP_PROD_HOST=prod.example.invalid
FTP_PROD_USER=prod-user
FTP_PROD_PASSWORD=prod-pass
FTP_PROD_DEST=/var/www/prod
";
