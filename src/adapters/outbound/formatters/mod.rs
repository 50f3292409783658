/// Formatter adapters for encoding SSP documents
mod oscal_xml_formatter;

pub use oscal_xml_formatter::OscalXmlFormatter;
