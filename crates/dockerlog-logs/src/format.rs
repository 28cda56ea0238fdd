use std::io::{self, Write};

use dockerlog_types::{LogEvent, OutputFormat};

/// Render an event as an output record, including its trailing newline(s)
pub fn format_event(event: &LogEvent, format: OutputFormat) -> String {
    match format {
        OutputFormat::Compact => format!(
            "{} - {} - {} - {} - {}\n",
            event.timestamp(),
            event.entity(),
            event.operation(),
            event.duration(),
            event.detail()
        ),
        OutputFormat::Readable => format!(
            "Date/Time: {}\nName: {}\nOperation: {}\nDuration: {}\nDetails: {}\n\n",
            event.timestamp(),
            event.entity(),
            event.operation(),
            event.duration(),
            event.detail()
        ),
    }
}

/// Write one event record to the sink
pub fn write_event<W: Write>(
    writer: &mut W,
    event: &LogEvent,
    format: OutputFormat,
) -> io::Result<()> {
    writer.write_all(format_event(event, format).as_bytes())
}
