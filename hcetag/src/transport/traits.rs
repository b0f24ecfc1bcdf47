// hcetag/src/transport/traits.rs
//! The interface a platform HCE binding drives.

use crate::emulator::TagEmulator;
use crate::types::DeactivationReason;

/// Entry points the platform NFC stack drives. A host binding forwards
/// each command APDU from the controller and the deactivation callback.
pub trait HostApduService {
    /// Answer a command APDU with a response APDU.
    fn process_command_apdu(&mut self, command: &[u8]) -> Vec<u8>;

    /// The link was lost or the reader selected another application.
    fn on_deactivated(&mut self, reason: DeactivationReason);
}

impl HostApduService for TagEmulator {
    fn process_command_apdu(&mut self, command: &[u8]) -> Vec<u8> {
        self.handle_command(command)
    }

    fn on_deactivated(&mut self, reason: DeactivationReason) {
        self.handle_deactivation(reason)
    }
}
