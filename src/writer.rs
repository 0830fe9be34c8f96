use crate::error::PaymentError;
use crate::link::PaymentLink;
use serde::Serialize;
use std::io::Write;

/// One row of batch output.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct LinkRecord {
    pub invoice_id: u32,
    pub out_sum: String,
    pub signature: String,
    pub url: String,
}

impl LinkRecord {
    pub fn from_link(invoice_id: u32, link: &PaymentLink) -> Self {
        Self {
            invoice_id,
            out_sum: link.param("OutSum").unwrap_or_default().to_owned(),
            signature: link.param("SignatureValue").unwrap_or_default().to_owned(),
            url: link.url.clone(),
        }
    }
}

pub struct LinkWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> LinkWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_link(&mut self, record: &LinkRecord) -> Result<(), PaymentError> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), PaymentError> {
        self.writer.flush()?;
        Ok(())
    }
}
