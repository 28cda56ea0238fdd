use regex::{Captures, Regex};
use tracing::trace;

use dockerlog_types::{LogEvent, Operation};

/// Timestamp field and proxy marker shared by every event pattern
const LINE_PREFIX: &str =
    r#"time="(?P<datetime>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z)".*?proxy << "#;

/// Shortest parenthesized group, holding the request duration
const DURATION: &str = r"\((?P<duration>.*?)\)";

/// A matcher recognizing one kind of lifecycle event in a proxy log line
pub trait EventMatcher {
    /// Try to extract an event; `None` when the line does not fit the pattern
    fn try_match(&self, line: &str) -> Option<LogEvent>;

    /// Short name for diagnostics
    fn name(&self) -> &'static str;
}

fn compile(request: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("{LINE_PREFIX}{request}"))
}

/// Pull the fields every pattern captures
fn common_fields<'a>(caps: &Captures<'a>) -> Option<(&'a str, &'a str)> {
    let datetime = caps.name("datetime")?.as_str();
    let duration = caps.name("duration")?.as_str();
    Some((datetime, duration))
}

/// `POST /containers/<id>/start` or `/restart`
pub struct StartRestartMatcher {
    pattern: Regex,
}

impl StartRestartMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = compile(&format!(
            r"POST /containers/(?P<container_id>[a-f0-9]+)/(?P<verb>start|restart) {DURATION}"
        ))?;
        Ok(Self { pattern })
    }
}

impl EventMatcher for StartRestartMatcher {
    fn try_match(&self, line: &str) -> Option<LogEvent> {
        let caps = self.pattern.captures(line)?;
        let (datetime, duration) = common_fields(&caps)?;
        let operation = Operation::from_container_verb(caps.name("verb")?.as_str())?;
        let container_id = caps.name("container_id")?.as_str();
        Some(LogEvent::new(datetime, container_id, operation, duration, ""))
    }

    fn name(&self) -> &'static str {
        "container-start"
    }
}

/// `POST /containers/<id>/stop`, optionally with query parameters
pub struct ContainerStopMatcher {
    pattern: Regex,
}

impl ContainerStopMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = compile(&format!(
            r"POST /containers/(?P<container_id>[a-f0-9]+)/(?P<verb>stop).*?{DURATION}"
        ))?;
        Ok(Self { pattern })
    }
}

impl EventMatcher for ContainerStopMatcher {
    fn try_match(&self, line: &str) -> Option<LogEvent> {
        let caps = self.pattern.captures(line)?;
        let (datetime, duration) = common_fields(&caps)?;
        let operation = Operation::from_container_verb(caps.name("verb")?.as_str())?;
        let container_id = caps.name("container_id")?.as_str();
        Some(LogEvent::new(datetime, container_id, operation, duration, ""))
    }

    fn name(&self) -> &'static str {
        "container-stop"
    }
}

/// `POST /images/create?fromImage=<name>&tag=<tag>`
///
/// Name and tag are limited to word characters, so registry-qualified or
/// URL-encoded image references are not recognized.
pub struct ImageCreateMatcher {
    pattern: Regex,
}

impl ImageCreateMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = compile(&format!(
            r"POST /images/create.*?fromImage=(?P<image_name>\w+)&tag=(?P<tag>\w+).*?{DURATION}"
        ))?;
        Ok(Self { pattern })
    }
}

impl EventMatcher for ImageCreateMatcher {
    fn try_match(&self, line: &str) -> Option<LogEvent> {
        let caps = self.pattern.captures(line)?;
        let (datetime, duration) = common_fields(&caps)?;
        let image_name = caps.name("image_name")?.as_str();
        let tag = caps.name("tag")?.as_str();
        Some(LogEvent::new(
            datetime,
            image_name,
            Operation::ImageCreate,
            duration,
            tag,
        ))
    }

    fn name(&self) -> &'static str {
        "image-create"
    }
}

/// `DELETE /containers/<id>`
pub struct ContainerDeleteMatcher {
    pattern: Regex,
}

impl ContainerDeleteMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = compile(&format!(
            r"DELETE /containers/(?P<container_id>[a-f0-9]+).*?{DURATION}"
        ))?;
        Ok(Self { pattern })
    }
}

impl EventMatcher for ContainerDeleteMatcher {
    fn try_match(&self, line: &str) -> Option<LogEvent> {
        let caps = self.pattern.captures(line)?;
        let (datetime, duration) = common_fields(&caps)?;
        let container_id = caps.name("container_id")?.as_str();
        Some(LogEvent::new(
            datetime,
            container_id,
            Operation::ContainerDelete,
            duration,
            "",
        ))
    }

    fn name(&self) -> &'static str {
        "container-delete"
    }
}

/// `DELETE /images/<reference>` where the reference may carry a registry
/// path and a `:tag` suffix
pub struct ImageDeleteMatcher {
    pattern: Regex,
}

impl ImageDeleteMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = compile(&format!(r"DELETE /images/(?P<reference>[^ ]+).*?{DURATION}"))?;
        Ok(Self { pattern })
    }
}

impl EventMatcher for ImageDeleteMatcher {
    fn try_match(&self, line: &str) -> Option<LogEvent> {
        let caps = self.pattern.captures(line)?;
        let (datetime, duration) = common_fields(&caps)?;
        let (image_name, tag) = split_image_reference(caps.name("reference")?.as_str());
        Some(LogEvent::new(
            datetime,
            image_name,
            Operation::ImageDelete,
            duration,
            tag,
        ))
    }

    fn name(&self) -> &'static str {
        "image-delete"
    }
}

/// Split an image reference on its last colon into name and tag.
///
/// Earlier colons (e.g. a registry port) stay in the name. Without a colon
/// the whole reference is the name and the tag is empty.
fn split_image_reference(reference: &str) -> (&str, &str) {
    reference.rsplit_once(':').unwrap_or((reference, ""))
}

/// Dispatches a line to the event matchers in priority order.
///
/// If more than one matcher could fit the same line, the earliest one wins:
/// start/restart, stop, image create, container delete, image delete.
pub struct EventParser {
    matchers: Vec<Box<dyn EventMatcher>>,
}

impl EventParser {
    /// Compile the built-in matchers
    pub fn new() -> Result<Self, regex::Error> {
        let matchers: Vec<Box<dyn EventMatcher>> = vec![
            Box::new(StartRestartMatcher::new()?),
            Box::new(ContainerStopMatcher::new()?),
            Box::new(ImageCreateMatcher::new()?),
            Box::new(ContainerDeleteMatcher::new()?),
            Box::new(ImageDeleteMatcher::new()?),
        ];

        Ok(Self::with_matchers(matchers))
    }

    /// Build a parser over an explicit priority list
    pub fn with_matchers(matchers: Vec<Box<dyn EventMatcher>>) -> Self {
        Self { matchers }
    }

    /// Return the first event any matcher extracts from the line
    pub fn parse(&self, line: &str) -> Option<LogEvent> {
        self.matchers.iter().find_map(|matcher| {
            let event = matcher.try_match(line)?;
            trace!(matcher = matcher.name(), "line matched");
            Some(event)
        })
    }

    /// Matcher names in priority order
    #[cfg(test)]
    pub(crate) fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }
}
