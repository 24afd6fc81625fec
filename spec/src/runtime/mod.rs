//! OCI runtime-spec v1 documents.

pub mod config;
pub mod linux;
pub mod solaris;
pub mod state;
pub mod vm;
pub mod windows;

pub use config::{
    ConsoleBox, Hook, Hooks, LinuxCapabilities, Mount, POSIXRlimit, Platform, Process, Root,
    Spec, User, SPEC_OCI_VERSION,
};
pub use linux::{
    Linux, LinuxBlockIO, LinuxCPU, LinuxDevice, LinuxDeviceCgroup, LinuxHugepageLimit,
    LinuxIDMapping, LinuxIntelRdt, LinuxInterfacePriority, LinuxMemory, LinuxNamespace,
    LinuxNetwork, LinuxPersonality, LinuxPids, LinuxRdma, LinuxResources, LinuxSeccomp,
    LinuxSeccompArg, LinuxSyscall, LinuxThrottleDevice, LinuxWeightDevice,
};
pub use solaris::{Solaris, SolarisAnet, SolarisCappedCPU, SolarisCappedMemory};
pub use state::{State, STATE_OCI_VERSION};
pub use vm::{VMHypervisor, VMImage, VMKernel, VM};
pub use windows::{
    Windows, WindowsCPUResources, WindowsDevice, WindowsHyperV, WindowsMemoryResources,
    WindowsNetwork, WindowsResources, WindowsStorageResources,
};
