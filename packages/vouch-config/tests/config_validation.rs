use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use vouch_config::Config;

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_value() -> Value {
	toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.")
}

fn render(value: &Value) -> String {
	toml::to_string(value).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("vouch_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_err(payload: String) -> String {
	let path = write_temp_config(payload);
	let result = vouch_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result.expect_err("Expected validation error.").to_string()
}

#[test]
fn template_config_is_valid() {
	let path = write_temp_config(render(&sample_value()));
	let result = vouch_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Template config must load.");

	assert_eq!(cfg.query.default_limit, 200);
	assert_eq!(cfg.storage.search_index.vectorizer.as_deref(), Some("openai/text-embedding-3-large"));
}

#[test]
fn embedding_dimensions_must_match_vector_dim() {
	let mut value = sample_value();
	let embedding = value
		.get_mut("providers")
		.and_then(|providers| providers.get_mut("embedding"))
		.and_then(Value::as_table_mut)
		.expect("Template config must include [providers.embedding].");

	embedding.insert("dimensions".to_string(), Value::Integer(1536));

	let message = load_err(render(&value));

	assert!(
		message.contains("providers.embedding.dimensions must match"),
		"Unexpected error message: {message}"
	);
}

#[test]
fn default_limit_must_be_positive() {
	let mut value = sample_value();
	let query = value
		.get_mut("query")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [query].");

	query.insert("default_limit".to_string(), Value::Integer(0));

	let message = load_err(render(&value));

	assert!(
		message.contains("query.default_limit must be greater than zero."),
		"Unexpected error message: {message}"
	);
}

#[test]
fn max_limit_must_not_undercut_default_limit() {
	let mut value = sample_value();
	let query = value
		.get_mut("query")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [query].");

	query.insert("max_limit".to_string(), Value::Integer(50));

	let message = load_err(render(&value));

	assert!(
		message.contains("query.max_limit must be greater than or equal to"),
		"Unexpected error message: {message}"
	);
}

#[test]
fn blank_vectorizer_normalizes_to_none() {
	let mut value = sample_value();
	let search_index = value
		.get_mut("storage")
		.and_then(|storage| storage.get_mut("search_index"))
		.and_then(Value::as_table_mut)
		.expect("Template config must include [storage.search_index].");

	search_index.insert("vectorizer".to_string(), Value::String("  ".to_string()));

	let path = write_temp_config(render(&value));
	let result = vouch_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg: Config = result.expect("Config with blank vectorizer must load.");

	assert!(cfg.storage.search_index.vectorizer.is_none());
}
