//! Subscriber setup.
//!
//! A bootstrap filter is installed before the config file is read, so config
//! loading is logged. Once the config is known the filter is reloaded with
//! its `log.level`, unless `RUST_LOG` was set.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Filter directive used when `RUST_LOG` is absent. `-v` raises anything
/// quieter than `debug` to `debug`.
pub fn default_directive(level: &str, verbose: bool) -> &str {
    if verbose && level != "trace" {
        "debug"
    } else {
        level
    }
}

fn directive_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn build<W>(
    filter: EnvFilter,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter_layer, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(writer));
    (subscriber, handle)
}

pub struct Logging {
    handle: FilterHandle,
    from_env: bool,
}

impl Logging {
    /// Install the global subscriber, writing to stderr.
    pub fn init(verbose: bool) -> Self {
        let env_filter = EnvFilter::try_from_default_env().ok();
        let from_env = env_filter.is_some();
        let filter =
            env_filter.unwrap_or_else(|| directive_filter(default_directive("info", verbose)));
        let (subscriber, handle) = build(filter, std::io::stderr);
        subscriber.init();
        Self { handle, from_env }
    }

    /// Narrow or widen the filter to the configured level.
    pub fn apply_level(&self, level: &str, verbose: bool) -> Result<(), reload::Error> {
        if self.from_env {
            return Ok(());
        }
        self.handle
            .reload(directive_filter(default_directive(level, verbose)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dasha_config::DashaConfig;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn config_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{text}").unwrap();
        file
    }

    #[test]
    fn verbose_raises_to_debug() {
        assert_eq!(default_directive("info", false), "info");
        assert_eq!(default_directive("warn", true), "debug");
        assert_eq!(default_directive("trace", true), "trace");
    }

    #[test]
    fn rejected_config_logged_by_bootstrap_filter() {
        let captured = Captured::default();
        let writer = captured.clone();
        let (subscriber, _handle) = build(directive_filter("info"), move || writer.clone());
        let file = config_file("[dasha]\nupcoming_count = 42\n");

        tracing::subscriber::with_default(subscriber, || {
            assert!(DashaConfig::from_file(file.path()).is_err());
        });
        assert!(captured.text().contains("rejected config file"));
    }

    #[test]
    fn config_load_visible_after_reload() {
        let captured = Captured::default();
        let writer = captured.clone();
        let (subscriber, handle) = build(directive_filter("warn"), move || writer.clone());
        let file = config_file("[log]\nlevel = \"debug\"\n");

        tracing::subscriber::with_default(subscriber, || {
            DashaConfig::from_file(file.path()).unwrap();
            assert!(!captured.text().contains("loaded config"));

            handle
                .reload(directive_filter(default_directive("debug", false)))
                .unwrap();
            DashaConfig::from_file(file.path()).unwrap();
        });
        assert!(captured.text().contains("loaded config"));
    }
}
