use crate::StatusCode;

macro_rules! test {
    ($name:ident, $code:expr, $then_name:expr, $then_error:expr) => {
        #[test]
        pub fn $name() {
            let code = StatusCode::new($code);

            assert_eq!(code.name(), $then_name);

            let error: Option<&str> = $then_error;
            assert_eq!(code.as_error().map(|e| e.to_string()).as_deref(), error);
            assert_eq!(code.to_result().is_err(), error.is_some());
        }
    };
}

test!(success, 0x0000_0000, "SUCCESS", None);
test!(pending, 0x0000_0103, "PENDING", Some("PENDING"));
test!(timeout, 0x0000_0102, "TIMEOUT", Some("TIMEOUT"));
test!(
    buffer_all_zeros,
    0x0000_0117,
    "BUFFER_ALL_ZEROS",
    Some("BUFFER_ALL_ZEROS")
);
test!(all_ones, 0xFFFF_FFFF, "UNKNOWN", None);
test!(unassigned_wait, 0x0000_0004, "UNKNOWN", None);
test!(unassigned_rpc, 0xC002_0059, "UNKNOWN", None);
test!(unassigned_ndis, 0xC023_0001, "UNKNOWN", None);
test!(
    port_do_not_disturb,
    0xC000_0036,
    "PORT_DO_NOT_DISTURB",
    Some("PORT_DO_NOT_DISTURB")
);
test!(
    no_more_files,
    0x8000_0006,
    "NO_MORE_FILES",
    Some("NO_MORE_FILES")
);
test!(
    logon_failure,
    0xC000_006D,
    "LOGON_FAILURE",
    Some("LOGON_FAILURE")
);
test!(
    rpc_call_failed,
    0xC002_001B,
    "RPC_NT_CALL_FAILED",
    Some("RPC_NT_CALL_FAILED")
);

macro_rules! facility {
    ($name:ident, $($value:literal => $then_name:literal,)*) => {
        #[test]
        pub fn $name() {
            $(
                let code = StatusCode::new($value);
                assert_eq!(code.name(), $then_name, "{code:?}");
            )*
        }
    };
}

facility!(
    success_range,
    0x0000_0000 => "SUCCESS",
    0x0000_0001 => "WAIT_1",
    0x0000_0003 => "WAIT_3",
    0x0000_003F => "WAIT_63",
    0x0000_0080 => "ABANDONED",
    0x0001_0001 => "DBG_EXCEPTION_HANDLED",
);

facility!(
    informational_range,
    0x4000_0000 => "OBJECT_NAME_EXISTS",
    0x4000_A144 => "SERVICES_FAILED_AUTOSTART",
    0x4004_0024 => "IO_FILE_QUOTA_THRESHOLD",
);

facility!(
    warning_range,
    0x8000_0001 => "GUARD_PAGE_VIOLATION",
    0x8000_002E => "CANNOT_GRANT_REQUESTED_OPLOCK",
    0x8000_CF05 => "CLOUD_FILE_TOO_MANY_PROPERTY_BLOBS",
    0x8004_001A => "IO_WRN_BAD_FIRMWARE",
    0x8005_003C => "MCA_WARNING_CACHE",
    0x8038_0001 => "VOLMGR_INCOMPLETE_REGENERATION",
);

facility!(
    error_range,
    0xC000_0001 => "UNSUCCESSFUL",
    0xC000_0036 => "PORT_DO_NOT_DISTURB",
    0xC000_041D => "FATAL_USER_CALLBACK_EXCEPTION",
    0xC000_04B0 => "STORAGE_RESERVE_NOT_EMPTY",
    0xC000_F505 => "FILE_SNAP_INVALID_PARAMETER",
);

facility!(
    rpc,
    0xC002_0001 => "RPC_NT_INVALID_STRING_BINDING",
    0xC002_001B => "RPC_NT_CALL_FAILED",
    0xC002_0062 => "RPC_NT_INVALID_ASYNC_HANDLE",
    0xC002_0063 => "RPC_NT_INVALID_ASYNC_CALL",
    0xC002_0064 => "RPC_NT_PROXY_ACCESS_DENIED",
    0xC002_0065 => "RPC_NT_COOKIE_AUTH_FAILED",
    0xC003_0001 => "RPC_NT_NO_MORE_ENTRIES",
    0xC003_0061 => "RPC_NT_PIPE_EMPTY",
);

facility!(
    io_and_machine_check,
    0xC004_0002 => "IO_ERR_INSUFFICIENT_RESOURCES",
    0xC004_00A4 => "IO_DUMP_INIT_DEDICATED_DUMP_FAILURE",
    0xC005_003D => "MCA_ERROR_CACHE",
    0xC005_0080 => "MCA_FRC_ERROR",
);

facility!(
    terminal_server,
    0xC00A_0001 => "CTX_WINSTATION_NAME_INVALID",
    0xC00A_003A => "TS_VIDEO_SUBSYSTEM_ERROR",
);

facility!(
    cluster,
    0xC013_0001 => "CLUSTER_INVALID_NODE",
    0xC013_0031 => "CLUSTER_CAM_TICKET_REPLAY_DETECTED",
);

facility!(
    acpi,
    0xC014_0001 => "ACPI_INVALID_OPCODE",
    0xC014_0021 => "ACPI_POWER_REQUEST_FAILED",
);

facility!(
    side_by_side,
    0xC015_0001 => "SXS_SECTION_NOT_FOUND",
    0xC015_0027 => "SXS_FILE_HASH_MISSING",
);

facility!(
    transaction,
    0xC019_0001 => "TRANSACTIONAL_CONFLICT",
    0xC019_0061 => "TRANSACTION_NOT_ENLISTED",
);

facility!(
    log_file_system,
    0xC01A_0001 => "LOG_SECTOR_INVALID",
    0xC01A_0030 => "LOG_PINNED_RESERVATION",
);

facility!(
    filter_manager,
    0xC01C_0001 => "FLT_NO_HANDLER_DEFINED",
    0xC01C_0024 => "FLT_WCOS_NOT_SUPPORTED",
);

facility!(
    graphics,
    0xC01E_0000 => "GRAPHICS_NOT_EXCLUSIVE_MODE_OWNER",
    0xC01E_05E8 => "GRAPHICS_SESSION_TYPE_CHANGE_IN_PROGRESS",
);

facility!(
    bitlocker,
    0xC021_0000 => "FVE_LOCKED_VOLUME",
    0xC021_0044 => "FVE_METADATA_FULL",
);

facility!(
    filtering_platform,
    0xC022_0001 => "FWP_CALLOUT_NOT_FOUND",
    0xC022_0104 => "FWP_DROP_NOICMP",
);

facility!(
    ndis,
    0xC023_0002 => "NDIS_CLOSING",
    0xC023_0004 => "NDIS_BAD_VERSION",
    0xC023_000C => "NDIS_REQUEST_ABORTED",
    0xC023_000D => "NDIS_RESET_IN_PROGRESS",
    0xC023_2008 => "NDIS_DOT11_AP_BAND_NOT_ALLOWED",
);

facility!(
    tpm,
    0xC029_0001 => "TPM_AUTHFAIL",
    0xC029_4000 => "TPM_ZERO_EXHAUST_ENABLED",
);

facility!(
    virtualization,
    0xC035_0002 => "HV_INVALID_HYPERCALL_CODE",
    0xC035_1000 => "HV_NOT_PRESENT",
    0xC036_0001 => "IPSEC_BAD_SPI",
    0xC036_8006 => "IPSEC_DOSP_MAX_PER_IP_RATELIMIT_QUEUES",
    0xC037_0001 => "VID_DUPLICATE_HANDLER",
    0xC037_0600 => "DM_OPERATION_LIMIT_EXCEEDED",
);

facility!(
    volume_manager,
    0xC038_0001 => "VOLMGR_DATABASE_FULL",
    0xC038_005C => "VOLMGR_RAID5_NOT_SUPPORTED",
);

facility!(
    virtual_disk,
    0xC03A_0001 => "VHD_DRIVE_FOOTER_MISSING",
    0xC03A_0034 => "VHD_UNEXPECTED_ID",
);

facility!(
    unassigned_words,
    0x0000_0004 => "UNKNOWN",
    0x0000_003E => "UNKNOWN",
    0x8000_0000 => "UNKNOWN",
    0xC000_0000 => "UNKNOWN",
    0xC002_0059 => "UNKNOWN",
    0xC002_005A => "UNKNOWN",
    0xC002_005B => "UNKNOWN",
    0xC023_0001 => "UNKNOWN",
    0xC023_0003 => "UNKNOWN",
    0xDEAD_BEEF => "UNKNOWN",
);

#[test]
fn catalog_size() {
    assert_eq!(StatusCode::known().count(), 2999);
}

#[test]
fn named_constants() {
    assert_eq!(StatusCode::SUCCESS.value(), 0x0000_0000);
    assert_eq!(StatusCode::TIMEOUT.value(), 0x0000_0102);
    assert_eq!(StatusCode::PENDING.value(), 0x0000_0103);
    assert_eq!(StatusCode::BUFFER_ALL_ZEROS.value(), 0x0000_0117);
}

#[test]
fn known_non_zero_codes_are_errors() {
    for code in StatusCode::known() {
        match code.as_error() {
            Some(error) => {
                assert_ne!(code, StatusCode::SUCCESS);
                assert_eq!(error.to_string(), code.name());
                assert_eq!(error.code(), code);
            }
            None => assert_eq!(code, StatusCode::SUCCESS),
        }
    }
}

#[test]
fn unknown_codes_are_not_errors() {
    let unknown = (0..=u32::MAX)
        .step_by(0x0001_0001)
        .map(StatusCode::new)
        .filter(|c| !c.is_known());

    for code in unknown {
        assert_eq!(code.name(), "UNKNOWN");
        assert!(code.as_error().is_none(), "{code:?}");
        assert!(code.is_success());
    }
}

#[test]
fn lookups_are_idempotent() {
    for value in [0, 0x103, 0xC000_0022, 0xDEAD_BEEF] {
        let code = StatusCode::new(value);

        assert_eq!(code.name(), code.name());
        assert_eq!(code.as_error(), code.as_error());
    }
}

#[test]
fn concurrent_lookups_match_serial_lookups() {
    let serial: Vec<_> = StatusCode::known()
        .chain([StatusCode::new(0xFFFF_FFFF)])
        .map(|c| (c.name(), c.as_error()))
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                StatusCode::known()
                    .chain([StatusCode::new(0xFFFF_FFFF)])
                    .map(|c| (c.name(), c.as_error()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), serial);
    }
}
