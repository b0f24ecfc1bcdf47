// hcetag/src/transport/mock.rs
//! Reader-side driver for tests and demos.

use crate::constants::{NDEF_APPLICATION_AID, NLEN_SIZE};
use crate::protocol::apdu::{encode_read_binary, encode_select_aid, encode_select_file};
use crate::protocol::{CapabilityContainer, split_status};
use crate::transport::traits::HostApduService;
use crate::types::{DeactivationReason, FileId};
use crate::{Error, Result};

/// Chunk size used by readers that stick to short APDUs
pub const SHORT_READ_CHUNK: usize = 0xFF;

/// Reader-side driver for tests and demos. Sends commands to a
/// [`HostApduService`] and records every exchange.
#[derive(Debug, Default)]
pub struct MockReader {
    /// Commands in the order sent
    pub sent: Vec<Vec<u8>>,
    /// Responses in the order received
    pub received: Vec<Vec<u8>>,
}

impl MockReader {
    /// Reader with an empty exchange record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Send one command and return the full response.
    pub fn transmit<S: HostApduService + ?Sized>(
        &mut self,
        service: &mut S,
        command: &[u8],
    ) -> Vec<u8> {
        let response = service.process_command_apdu(command);
        self.sent.push(command.to_vec());
        self.received.push(response.clone());
        response
    }

    /// Send one command and require 9000; returns the data field.
    pub fn transceive<S: HostApduService + ?Sized>(
        &mut self,
        service: &mut S,
        command: &[u8],
    ) -> Result<Vec<u8>> {
        let response = self.transmit(service, command);
        let (data, sw) = split_status(&response)?;
        if sw != 0x9000 {
            return Err(Error::UnexpectedStatus(sw));
        }
        Ok(data.to_vec())
    }

    /// SELECT the NDEF Tag Application by AID.
    pub fn select_ndef_application<S: HostApduService + ?Sized>(
        &mut self,
        service: &mut S,
    ) -> Result<()> {
        self.transceive(service, &encode_select_aid(&NDEF_APPLICATION_AID))
            .map(|_| ())
    }

    /// SELECT a file by id without FCI.
    pub fn select_file<S: HostApduService + ?Sized>(
        &mut self,
        service: &mut S,
        file_id: FileId,
    ) -> Result<()> {
        self.transceive(service, &encode_select_file(file_id))
            .map(|_| ())
    }

    /// READ BINARY `le` bytes at `offset`.
    pub fn read_binary<S: HostApduService + ?Sized>(
        &mut self,
        service: &mut S,
        offset: u16,
        le: u8,
    ) -> Result<Vec<u8>> {
        self.transceive(service, &encode_read_binary(offset, le))
    }

    /// The full read sequence of a Type 4 Tag reader: select the
    /// application, read the CC, then read NLEN and the NDEF message in
    /// short-APDU chunks. Returns the NDEF file (NLEN included).
    pub fn read_ndef_file<S: HostApduService + ?Sized>(
        &mut self,
        service: &mut S,
    ) -> Result<Vec<u8>> {
        self.select_ndef_application(service)?;

        self.select_file(service, FileId::CAPABILITY_CONTAINER)?;
        let cc_bytes = self.read_binary(service, 0, 0x0F)?;
        let cc = CapabilityContainer::parse(&cc_bytes)?;
        let chunk = (cc.max_le as usize).clamp(1, SHORT_READ_CHUNK);

        self.select_file(service, cc.ndef_file_id)?;
        let nlen_bytes = self.read_binary(service, 0, NLEN_SIZE as u8)?;
        if nlen_bytes.len() != NLEN_SIZE {
            return Err(Error::InvalidLength {
                expected: NLEN_SIZE,
                actual: nlen_bytes.len(),
            });
        }
        let nlen = u16::from_be_bytes([nlen_bytes[0], nlen_bytes[1]]) as usize;
        if NLEN_SIZE + nlen > cc.max_ndef_size as usize {
            return Err(Error::NdefFormat(format!(
                "NLEN {} exceeds advertised maximum {}",
                nlen, cc.max_ndef_size
            )));
        }

        let mut file = nlen_bytes;
        while file.len() < NLEN_SIZE + nlen {
            let want = (NLEN_SIZE + nlen - file.len()).min(chunk);
            let part = self.read_binary(service, file.len() as u16, want as u8)?;
            if part.is_empty() {
                return Err(Error::InvalidLength {
                    expected: NLEN_SIZE + nlen,
                    actual: file.len(),
                });
            }
            file.extend_from_slice(&part);
        }
        Ok(file)
    }

    /// Tear the link down.
    pub fn deactivate<S: HostApduService + ?Sized>(
        &mut self,
        service: &mut S,
        reason: DeactivationReason,
    ) {
        service.on_deactivated(reason);
    }
}
