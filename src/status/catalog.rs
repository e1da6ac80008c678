//! The catalog of named NT status codes.
//!
//! Generated from Microsoft's published NTSTATUS list (`ntstatus.h`, as
//! shipped in the Windows SDK metadata), with the `STATUS_` prefix removed.
//! Codes published under their own prefix (`RPC_NT_`, `EPT_NT_`, `DBG_`,
//! `IO_`, `MCA_`, `VOLMGR_`) keep it.
//!
//! Where the list gives one value several names, only the `STATUS_` name is
//! kept (`SUCCESS` over `WAIT_0`, `ABANDONED` over `ABANDONED_WAIT_0`).
//! Exception-code aliases such as `EXCEPTION_ACCESS_VIOLATION` are not
//! included.

use super::StatusCode;

/// Defines every catalogued code as an associated constant of [`StatusCode`],
/// together with the lookup table used by [`StatusCode::name`].
///
/// The constant's identifier is the name returned for its value, so the two
/// can never drift apart.
macro_rules! status_codes {
    ($($name:ident = $value:literal,)*) => {
        impl StatusCode {
            $(
                #[doc = concat!("`", stringify!($name), "` (`", stringify!($value), "`)")]
                pub const $name: StatusCode = StatusCode($value);
            )*
        }

        /// All catalogued codes, in ascending order.
        pub(super) const KNOWN: &[StatusCode] = &[$(StatusCode::$name,)*];

        pub(super) const fn lookup(value: u32) -> Option<&'static str> {
            match value {
                $($value => Some(stringify!($name)),)*
                _ => None,
            }
        }
    };
}

status_codes! {
    // Success, facility 0x000
    SUCCESS = 0x0000_0000,
    WAIT_1 = 0x0000_0001,
    WAIT_2 = 0x0000_0002,
    WAIT_3 = 0x0000_0003,
    WAIT_63 = 0x0000_003F,
    ABANDONED = 0x0000_0080,
    ABANDONED_WAIT_63 = 0x0000_00BF,
    USER_APC = 0x0000_00C0,
    ALREADY_COMPLETE = 0x0000_00FF,
    KERNEL_APC = 0x0000_0100,
    ALERTED = 0x0000_0101,
    TIMEOUT = 0x0000_0102,
    PENDING = 0x0000_0103,
    REPARSE = 0x0000_0104,
    MORE_ENTRIES = 0x0000_0105,
    NOT_ALL_ASSIGNED = 0x0000_0106,
    SOME_NOT_MAPPED = 0x0000_0107,
    OPLOCK_BREAK_IN_PROGRESS = 0x0000_0108,
    VOLUME_MOUNTED = 0x0000_0109,
    RXACT_COMMITTED = 0x0000_010A,
    NOTIFY_CLEANUP = 0x0000_010B,
    NOTIFY_ENUM_DIR = 0x0000_010C,
    NO_QUOTAS_FOR_ACCOUNT = 0x0000_010D,
    PRIMARY_TRANSPORT_CONNECT_FAILED = 0x0000_010E,
    PAGE_FAULT_TRANSITION = 0x0000_0110,
    PAGE_FAULT_DEMAND_ZERO = 0x0000_0111,
    PAGE_FAULT_COPY_ON_WRITE = 0x0000_0112,
    PAGE_FAULT_GUARD_PAGE = 0x0000_0113,
    PAGE_FAULT_PAGING_FILE = 0x0000_0114,
    CACHE_PAGE_LOCKED = 0x0000_0115,
    CRASH_DUMP = 0x0000_0116,
    BUFFER_ALL_ZEROS = 0x0000_0117,
    REPARSE_OBJECT = 0x0000_0118,
    RESOURCE_REQUIREMENTS_CHANGED = 0x0000_0119,
    TRANSLATION_COMPLETE = 0x0000_0120,
    DS_MEMBERSHIP_EVALUATED_LOCALLY = 0x0000_0121,
    NOTHING_TO_TERMINATE = 0x0000_0122,
    PROCESS_NOT_IN_JOB = 0x0000_0123,
    PROCESS_IN_JOB = 0x0000_0124,
    VOLSNAP_HIBERNATE_READY = 0x0000_0125,
    FSFILTER_OP_COMPLETED_SUCCESSFULLY = 0x0000_0126,
    INTERRUPT_VECTOR_ALREADY_CONNECTED = 0x0000_0127,
    INTERRUPT_STILL_CONNECTED = 0x0000_0128,
    PROCESS_CLONED = 0x0000_0129,
    FILE_LOCKED_WITH_ONLY_READERS = 0x0000_012A,
    FILE_LOCKED_WITH_WRITERS = 0x0000_012B,
    VALID_IMAGE_HASH = 0x0000_012C,
    VALID_CATALOG_HASH = 0x0000_012D,
    VALID_STRONG_CODE_HASH = 0x0000_012E,
    GHOSTED = 0x0000_012F,
    DATA_OVERWRITTEN = 0x0000_0130,
    RESOURCEMANAGER_READ_ONLY = 0x0000_0202,
    RING_PREVIOUSLY_EMPTY = 0x0000_0210,
    RING_PREVIOUSLY_FULL = 0x0000_0211,
    RING_PREVIOUSLY_ABOVE_QUOTA = 0x0000_0212,
    RING_NEWLY_EMPTY = 0x0000_0213,
    RING_SIGNAL_OPPOSITE_ENDPOINT = 0x0000_0214,
    OPLOCK_SWITCHED_TO_NEW_HANDLE = 0x0000_0215,
    OPLOCK_HANDLE_CLOSED = 0x0000_0216,
    WAIT_FOR_OPLOCK = 0x0000_0367,
    REPARSE_GLOBAL = 0x0000_0368,
    PAGE_FAULT_RETRY = 0x0000_0369,

    // Success, facility 0x001
    DBG_EXCEPTION_HANDLED = 0x0001_0001,
    DBG_CONTINUE = 0x0001_0002,

    // Success, facility 0x004
    IO_ERR_RETRY_SUCCEEDED = 0x0004_0001,
    IO_DUMP_CREATION_SUCCESS = 0x0004_00A2,

    // Success, facility 0x01C
    FLT_IO_COMPLETE = 0x001C_0001,

    // Success, facility 0x029
    RTPM_CONTEXT_CONTINUE = 0x0029_3000,
    RTPM_CONTEXT_COMPLETE = 0x0029_3001,

    // Success, facility 0x035
    HV_PENDING_PAGE_REQUESTS = 0x0035_0059,

    // Success, facility 0x0E7
    SPACES_REPAIRED = 0x00E7_0000,
    SPACES_PAUSE = 0x00E7_0001,
    SPACES_COMPLETE = 0x00E7_0002,
    SPACES_REDIRECT = 0x00E7_0003,

    // Informational, facility 0x000
    OBJECT_NAME_EXISTS = 0x4000_0000,
    THREAD_WAS_SUSPENDED = 0x4000_0001,
    WORKING_SET_LIMIT_RANGE = 0x4000_0002,
    IMAGE_NOT_AT_BASE = 0x4000_0003,
    RXACT_STATE_CREATED = 0x4000_0004,
    SEGMENT_NOTIFICATION = 0x4000_0005,
    LOCAL_USER_SESSION_KEY = 0x4000_0006,
    BAD_CURRENT_DIRECTORY = 0x4000_0007,
    SERIAL_MORE_WRITES = 0x4000_0008,
    REGISTRY_RECOVERED = 0x4000_0009,
    FT_READ_RECOVERY_FROM_BACKUP = 0x4000_000A,
    FT_WRITE_RECOVERY = 0x4000_000B,
    SERIAL_COUNTER_TIMEOUT = 0x4000_000C,
    NULL_LM_PASSWORD = 0x4000_000D,
    IMAGE_MACHINE_TYPE_MISMATCH = 0x4000_000E,
    RECEIVE_PARTIAL = 0x4000_000F,
    RECEIVE_EXPEDITED = 0x4000_0010,
    RECEIVE_PARTIAL_EXPEDITED = 0x4000_0011,
    EVENT_DONE = 0x4000_0012,
    EVENT_PENDING = 0x4000_0013,
    CHECKING_FILE_SYSTEM = 0x4000_0014,
    FATAL_APP_EXIT = 0x4000_0015,
    PREDEFINED_HANDLE = 0x4000_0016,
    WAS_UNLOCKED = 0x4000_0017,
    SERVICE_NOTIFICATION = 0x4000_0018,
    WAS_LOCKED = 0x4000_0019,
    LOG_HARD_ERROR = 0x4000_001A,
    ALREADY_WIN32 = 0x4000_001B,
    WX86_UNSIMULATE = 0x4000_001C,
    WX86_CONTINUE = 0x4000_001D,
    WX86_SINGLE_STEP = 0x4000_001E,
    WX86_BREAKPOINT = 0x4000_001F,
    WX86_EXCEPTION_CONTINUE = 0x4000_0020,
    WX86_EXCEPTION_LASTCHANCE = 0x4000_0021,
    WX86_EXCEPTION_CHAIN = 0x4000_0022,
    IMAGE_MACHINE_TYPE_MISMATCH_EXE = 0x4000_0023,
    NO_YIELD_PERFORMED = 0x4000_0024,
    TIMER_RESUME_IGNORED = 0x4000_0025,
    ARBITRATION_UNHANDLED = 0x4000_0026,
    CARDBUS_NOT_SUPPORTED = 0x4000_0027,
    WX86_CREATEWX86TIB = 0x4000_0028,
    MP_PROCESSOR_MISMATCH = 0x4000_0029,
    HIBERNATED = 0x4000_002A,
    RESUME_HIBERNATION = 0x4000_002B,
    FIRMWARE_UPDATED = 0x4000_002C,
    DRIVERS_LEAKING_LOCKED_PAGES = 0x4000_002D,
    MESSAGE_RETRIEVED = 0x4000_002E,
    SYSTEM_POWERSTATE_TRANSITION = 0x4000_002F,
    ALPC_CHECK_COMPLETION_LIST = 0x4000_0030,
    SYSTEM_POWERSTATE_COMPLEX_TRANSITION = 0x4000_0031,
    ACCESS_AUDIT_BY_POLICY = 0x4000_0032,
    ABANDON_HIBERFILE = 0x4000_0033,
    BIZRULES_NOT_ENABLED = 0x4000_0034,
    FT_READ_FROM_COPY = 0x4000_0035,
    IMAGE_AT_DIFFERENT_BASE = 0x4000_0036,
    PATCH_DEFERRED = 0x4000_0037,
    EMULATION_BREAKPOINT = 0x4000_0038,
    EMULATION_SYSCALL = 0x4000_0039,
    WAKE_SYSTEM = 0x4000_0294,
    DS_SHUTTING_DOWN = 0x4000_0370,
    DISK_REPAIR_REDIRECTED = 0x4000_0807,
    SERVICES_FAILED_AUTOSTART = 0x4000_A144,

    // Informational, facility 0x001
    DBG_REPLY_LATER = 0x4001_0001,
    DBG_UNABLE_TO_PROVIDE_HANDLE = 0x4001_0002,
    DBG_TERMINATE_THREAD = 0x4001_0003,
    DBG_TERMINATE_PROCESS = 0x4001_0004,
    DBG_CONTROL_C = 0x4001_0005,
    DBG_PRINTEXCEPTION_C = 0x4001_0006,
    DBG_RIPEXCEPTION = 0x4001_0007,
    DBG_CONTROL_BREAK = 0x4001_0008,
    DBG_COMMAND_EXCEPTION = 0x4001_0009,
    DBG_PRINTEXCEPTION_WIDE_C = 0x4001_000A,

    // Informational, facility 0x002
    RPC_NT_UUID_LOCAL_ONLY = 0x4002_0056,
    RPC_NT_SEND_INCOMPLETE = 0x4002_00AF,

    // Informational, facility 0x004
    IO_FILE_QUOTA_THRESHOLD = 0x4004_0024,
    IO_FILE_QUOTA_LIMIT = 0x4004_0025,
    IO_FILE_QUOTA_STARTED = 0x4004_0026,
    IO_FILE_QUOTA_SUCCEEDED = 0x4004_0027,
    IO_INFO_THROTTLE_COMPLETE = 0x4004_0077,
    IO_CDROM_EXCLUSIVE_LOCK = 0x4004_0085,
    IO_WARNING_DISK_FIRMWARE_UPDATED = 0x4004_009F,
    IO_WARNING_ADAPTER_FIRMWARE_UPDATED = 0x4004_00A0,

    // Informational, facility 0x005
    MCA_INFO_CPU_THERMAL_THROTTLING_REMOVED = 0x4005_0070,
    MCA_INFO_NO_MORE_CORRECTED_ERROR_LOGS = 0x4005_0073,
    MCA_INFO_MEMORY_PAGE_MARKED_BAD = 0x4005_0074,

    // Informational, facility 0x00A
    CTX_CDM_CONNECT = 0x400A_0004,
    CTX_CDM_DISCONNECT = 0x400A_0005,

    // Informational, facility 0x015
    SXS_RELEASE_ACTIVATION_CONTEXT = 0x4015_000D,

    // Informational, facility 0x019
    HEURISTIC_DAMAGE_POSSIBLE = 0x4019_0001,
    RECOVERY_NOT_NEEDED = 0x4019_0034,
    RM_ALREADY_STARTED = 0x4019_0035,

    // Informational, facility 0x01A
    LOG_NO_RESTART = 0x401A_000C,

    // Informational, facility 0x01B
    VIDEO_DRIVER_DEBUG_REPORT_REQUEST = 0x401B_00EC,

    // Informational, facility 0x01E
    GRAPHICS_PARTIAL_DATA_POPULATED = 0x401E_000A,
    GRAPHICS_SKIP_ALLOCATION_PREPARATION = 0x401E_0201,
    GRAPHICS_MODE_NOT_PINNED = 0x401E_0307,
    GRAPHICS_NO_PREFERRED_MODE = 0x401E_031E,
    GRAPHICS_DATASET_IS_EMPTY = 0x401E_034B,
    GRAPHICS_NO_MORE_ELEMENTS_IN_DATASET = 0x401E_034C,
    GRAPHICS_PATH_CONTENT_GEOMETRY_TRANSFORMATION_NOT_PINNED = 0x401E_0351,
    GRAPHICS_UNKNOWN_CHILD_STATUS = 0x401E_042F,
    GRAPHICS_LEADLINK_START_DEFERRED = 0x401E_0437,
    GRAPHICS_POLLING_TOO_FREQUENTLY = 0x401E_0439,
    GRAPHICS_START_DEFERRED = 0x401E_043A,
    GRAPHICS_DEPENDABLE_CHILD_STATUS = 0x401E_043C,

    // Informational, facility 0x023
    NDIS_INDICATION_REQUIRED = 0x4023_0001,

    // Informational, facility 0x029
    PCP_UNSUPPORTED_PSS_SALT = 0x4029_2023,

    // Warning, facility 0x000
    GUARD_PAGE_VIOLATION = 0x8000_0001,
    DATATYPE_MISALIGNMENT = 0x8000_0002,
    BREAKPOINT = 0x8000_0003,
    SINGLE_STEP = 0x8000_0004,
    BUFFER_OVERFLOW = 0x8000_0005,
    NO_MORE_FILES = 0x8000_0006,
    WAKE_SYSTEM_DEBUGGER = 0x8000_0007,
    HANDLES_CLOSED = 0x8000_000A,
    NO_INHERITANCE = 0x8000_000B,
    GUID_SUBSTITUTION_MADE = 0x8000_000C,
    PARTIAL_COPY = 0x8000_000D,
    DEVICE_PAPER_EMPTY = 0x8000_000E,
    DEVICE_POWERED_OFF = 0x8000_000F,
    DEVICE_OFF_LINE = 0x8000_0010,
    DEVICE_BUSY = 0x8000_0011,
    NO_MORE_EAS = 0x8000_0012,
    INVALID_EA_NAME = 0x8000_0013,
    EA_LIST_INCONSISTENT = 0x8000_0014,
    INVALID_EA_FLAG = 0x8000_0015,
    VERIFY_REQUIRED = 0x8000_0016,
    EXTRANEOUS_INFORMATION = 0x8000_0017,
    RXACT_COMMIT_NECESSARY = 0x8000_0018,
    NO_MORE_ENTRIES = 0x8000_001A,
    FILEMARK_DETECTED = 0x8000_001B,
    MEDIA_CHANGED = 0x8000_001C,
    BUS_RESET = 0x8000_001D,
    END_OF_MEDIA = 0x8000_001E,
    BEGINNING_OF_MEDIA = 0x8000_001F,
    MEDIA_CHECK = 0x8000_0020,
    SETMARK_DETECTED = 0x8000_0021,
    NO_DATA_DETECTED = 0x8000_0022,
    REDIRECTOR_HAS_OPEN_HANDLES = 0x8000_0023,
    SERVER_HAS_OPEN_HANDLES = 0x8000_0024,
    ALREADY_DISCONNECTED = 0x8000_0025,
    LONGJUMP = 0x8000_0026,
    CLEANER_CARTRIDGE_INSTALLED = 0x8000_0027,
    PLUGPLAY_QUERY_VETOED = 0x8000_0028,
    UNWIND_CONSOLIDATE = 0x8000_0029,
    REGISTRY_HIVE_RECOVERED = 0x8000_002A,
    DLL_MIGHT_BE_INSECURE = 0x8000_002B,
    DLL_MIGHT_BE_INCOMPATIBLE = 0x8000_002C,
    STOPPED_ON_SYMLINK = 0x8000_002D,
    CANNOT_GRANT_REQUESTED_OPLOCK = 0x8000_002E,
    NO_ACE_CONDITION = 0x8000_002F,
    DEVICE_SUPPORT_IN_PROGRESS = 0x8000_0030,
    DEVICE_POWER_CYCLE_REQUIRED = 0x8000_0031,
    NO_WORK_DONE = 0x8000_0032,
    RETURN_ADDRESS_HIJACK_ATTEMPT = 0x8000_0033,
    RECOVERABLE_BUGCHECK = 0x8000_0034,
    DEVICE_RESET_REQUIRED = 0x8000_01B6,
    DEVICE_REQUIRES_CLEANING = 0x8000_0288,
    DEVICE_DOOR_OPEN = 0x8000_0289,
    DATA_LOST_REPAIR = 0x8000_0803,
    GPIO_INTERRUPT_ALREADY_UNMASKED = 0x8000_A127,
    CLOUD_FILE_PROPERTY_BLOB_CHECKSUM_MISMATCH = 0x8000_CF00,
    CLOUD_FILE_PROPERTY_BLOB_TOO_LARGE = 0x8000_CF04,
    CLOUD_FILE_TOO_MANY_PROPERTY_BLOBS = 0x8000_CF05,

    // Warning, facility 0x001
    DBG_EXCEPTION_NOT_HANDLED = 0x8001_0001,

    // Warning, facility 0x004
    IO_WRN_BAD_FIRMWARE = 0x8004_001A,
    IO_WRITE_CACHE_ENABLED = 0x8004_0020,
    IO_RECOVERED_VIA_ECC = 0x8004_0021,
    IO_WRITE_CACHE_DISABLED = 0x8004_0022,
    IO_FILE_QUOTA_FAILED = 0x8004_0028,
    IO_LOST_DELAYED_WRITE = 0x8004_0032,
    IO_WARNING_PAGING_FAILURE = 0x8004_0033,
    IO_WRN_FAILURE_PREDICTED = 0x8004_0034,
    IO_WARNING_INTERRUPT_STILL_PENDING = 0x8004_0035,
    IO_DRIVER_CANCEL_TIMEOUT = 0x8004_0036,
    IO_WARNING_ALLOCATION_FAILED = 0x8004_0038,
    IO_WARNING_LOG_FLUSH_FAILED = 0x8004_0039,
    IO_WARNING_DUPLICATE_SIGNATURE = 0x8004_003A,
    IO_WARNING_DUPLICATE_PATH = 0x8004_003B,
    IO_WARNING_BUS_RESET = 0x8004_0076,
    IO_WARNING_RESET = 0x8004_0081,
    IO_WARNING_WRITE_FUA_PROBLEM = 0x8004_0084,
    IO_LOST_DELAYED_WRITE_NETWORK_DISCONNECTED = 0x8004_008B,
    IO_LOST_DELAYED_WRITE_NETWORK_SERVER_ERROR = 0x8004_008C,
    IO_LOST_DELAYED_WRITE_NETWORK_LOCAL_DISK_ERROR = 0x8004_008D,
    IO_WARNING_VOLUME_LOST_DISK_EXTENT = 0x8004_008E,
    IO_WARNING_DEVICE_HAS_INTERNAL_DUMP = 0x8004_008F,
    IO_WARNING_SOFT_THRESHOLD_REACHED = 0x8004_0090,
    IO_WARNING_SOFT_THRESHOLD_REACHED_EX = 0x8004_0091,
    IO_WARNING_SOFT_THRESHOLD_REACHED_EX_LUN_LUN = 0x8004_0092,
    IO_WARNING_SOFT_THRESHOLD_REACHED_EX_LUN_POOL = 0x8004_0093,
    IO_WARNING_SOFT_THRESHOLD_REACHED_EX_POOL_LUN = 0x8004_0094,
    IO_WARNING_SOFT_THRESHOLD_REACHED_EX_POOL_POOL = 0x8004_0095,
    IO_WARNING_DISK_CAPACITY_CHANGED = 0x8004_0097,
    IO_WARNING_DISK_PROVISIONING_TYPE_CHANGED = 0x8004_0098,
    IO_WARNING_IO_OPERATION_RETRIED = 0x8004_0099,
    IO_WARNING_COMPLETION_TIME = 0x8004_009B,
    IO_WARNING_DUMP_DISABLED_DEVICE_GONE = 0x8004_009C,
    IO_WARNING_DISK_SURPRISE_REMOVED = 0x8004_009D,
    IO_WARNING_REPEATED_DISK_GUID = 0x8004_009E,

    // Warning, facility 0x005
    MCA_WARNING_CACHE = 0x8005_003C,
    MCA_WARNING_TLB = 0x8005_003E,
    MCA_WARNING_CPU_BUS = 0x8005_0040,
    MCA_WARNING_REGISTER_FILE = 0x8005_0042,
    MCA_WARNING_MAS = 0x8005_0044,
    MCA_WARNING_MEM_UNKNOWN = 0x8005_0046,
    MCA_WARNING_MEM_1_2 = 0x8005_0048,
    MCA_WARNING_MEM_1_2_5 = 0x8005_004A,
    MCA_WARNING_MEM_1_2_5_4 = 0x8005_004C,
    MCA_WARNING_SYSTEM_EVENT = 0x8005_004E,
    MCA_WARNING_PCI_BUS_PARITY = 0x8005_0050,
    MCA_WARNING_PCI_BUS_PARITY_NO_INFO = 0x8005_0052,
    MCA_WARNING_PCI_BUS_SERR = 0x8005_0054,
    MCA_WARNING_PCI_BUS_SERR_NO_INFO = 0x8005_0056,
    MCA_WARNING_PCI_BUS_MASTER_ABORT = 0x8005_0058,
    MCA_WARNING_PCI_BUS_MASTER_ABORT_NO_INFO = 0x8005_005A,
    MCA_WARNING_PCI_BUS_TIMEOUT = 0x8005_005C,
    MCA_WARNING_PCI_BUS_TIMEOUT_NO_INFO = 0x8005_005E,
    MCA_WARNING_PCI_BUS_UNKNOWN = 0x8005_0060,
    MCA_WARNING_PCI_DEVICE = 0x8005_0062,
    MCA_WARNING_SMBIOS = 0x8005_0064,
    MCA_WARNING_PLATFORM_SPECIFIC = 0x8005_0066,
    MCA_WARNING_UNKNOWN = 0x8005_0068,
    MCA_WARNING_UNKNOWN_NO_CPU = 0x8005_006A,
    MCA_WARNING_CMC_THRESHOLD_EXCEEDED = 0x8005_006D,
    MCA_WARNING_CPE_THRESHOLD_EXCEEDED = 0x8005_006E,
    MCA_WARNING_CPU_THERMAL_THROTTLED = 0x8005_006F,
    MCA_WARNING_CPU = 0x8005_0071,

    // Warning, facility 0x013
    CLUSTER_NODE_ALREADY_UP = 0x8013_0001,
    CLUSTER_NODE_ALREADY_DOWN = 0x8013_0002,
    CLUSTER_NETWORK_ALREADY_ONLINE = 0x8013_0003,
    CLUSTER_NETWORK_ALREADY_OFFLINE = 0x8013_0004,
    CLUSTER_NODE_ALREADY_MEMBER = 0x8013_0005,

    // Warning, facility 0x019
    COULD_NOT_RESIZE_LOG = 0x8019_0009,
    NO_TXF_METADATA = 0x8019_0029,
    CANT_RECOVER_WITH_HANDLE_OPEN = 0x8019_0031,
    TXF_METADATA_ALREADY_PRESENT = 0x8019_0041,
    TRANSACTION_SCOPE_CALLBACKS_NOT_SET = 0x8019_0042,

    // Warning, facility 0x01B
    VIDEO_HUNG_DISPLAY_DRIVER_THREAD_RECOVERED = 0x801B_00EB,

    // Warning, facility 0x01C
    FLT_BUFFER_TOO_SMALL = 0x801C_0001,

    // Warning, facility 0x01E
    GRAPHICS_LINK_CONFIGURATION_IN_PROGRESS = 0x801E_0000,

    // Warning, facility 0x021
    FVE_PARTIAL_METADATA = 0x8021_0001,
    FVE_TRANSIENT_STATE = 0x8021_0002,

    // Warning, facility 0x037
    VID_REMOTE_NODE_PARENT_GPA_PAGES_USED = 0x8037_0001,

    // Warning, facility 0x038
    VOLMGR_INCOMPLETE_REGENERATION = 0x8038_0001,
    VOLMGR_INCOMPLETE_DISK_MIGRATION = 0x8038_0002,
    VOLMGR_KSR_BYPASS = 0x8038_0003,

    // Warning, facility 0x039
    BCD_NOT_ALL_ENTRIES_IMPORTED = 0x8039_0001,
    BCD_NOT_ALL_ENTRIES_SYNCHRONIZED = 0x8039_0003,

    // Warning, facility 0x03A
    QUERY_STORAGE_ERROR = 0x803A_0001,

    // Warning, facility 0x03F
    GDI_HANDLE_LEAK = 0x803F_0001,

    // Warning, facility 0x043
    SECUREBOOT_NOT_ENABLED = 0x8043_0006,

    // Error, facility 0x000
    UNSUCCESSFUL = 0xC000_0001,
    NOT_IMPLEMENTED = 0xC000_0002,
    INVALID_INFO_CLASS = 0xC000_0003,
    INFO_LENGTH_MISMATCH = 0xC000_0004,
    ACCESS_VIOLATION = 0xC000_0005,
    IN_PAGE_ERROR = 0xC000_0006,
    PAGEFILE_QUOTA = 0xC000_0007,
    INVALID_HANDLE = 0xC000_0008,
    BAD_INITIAL_STACK = 0xC000_0009,
    BAD_INITIAL_PC = 0xC000_000A,
    INVALID_CID = 0xC000_000B,
    TIMER_NOT_CANCELED = 0xC000_000C,
    INVALID_PARAMETER = 0xC000_000D,
    NO_SUCH_DEVICE = 0xC000_000E,
    NO_SUCH_FILE = 0xC000_000F,
    INVALID_DEVICE_REQUEST = 0xC000_0010,
    END_OF_FILE = 0xC000_0011,
    WRONG_VOLUME = 0xC000_0012,
    NO_MEDIA_IN_DEVICE = 0xC000_0013,
    UNRECOGNIZED_MEDIA = 0xC000_0014,
    NONEXISTENT_SECTOR = 0xC000_0015,
    MORE_PROCESSING_REQUIRED = 0xC000_0016,
    NO_MEMORY = 0xC000_0017,
    CONFLICTING_ADDRESSES = 0xC000_0018,
    NOT_MAPPED_VIEW = 0xC000_0019,
    UNABLE_TO_FREE_VM = 0xC000_001A,
    UNABLE_TO_DELETE_SECTION = 0xC000_001B,
    INVALID_SYSTEM_SERVICE = 0xC000_001C,
    ILLEGAL_INSTRUCTION = 0xC000_001D,
    INVALID_LOCK_SEQUENCE = 0xC000_001E,
    INVALID_VIEW_SIZE = 0xC000_001F,
    INVALID_FILE_FOR_SECTION = 0xC000_0020,
    ALREADY_COMMITTED = 0xC000_0021,
    ACCESS_DENIED = 0xC000_0022,
    BUFFER_TOO_SMALL = 0xC000_0023,
    OBJECT_TYPE_MISMATCH = 0xC000_0024,
    NONCONTINUABLE_EXCEPTION = 0xC000_0025,
    INVALID_DISPOSITION = 0xC000_0026,
    UNWIND = 0xC000_0027,
    BAD_STACK = 0xC000_0028,
    INVALID_UNWIND_TARGET = 0xC000_0029,
    NOT_LOCKED = 0xC000_002A,
    PARITY_ERROR = 0xC000_002B,
    UNABLE_TO_DECOMMIT_VM = 0xC000_002C,
    NOT_COMMITTED = 0xC000_002D,
    INVALID_PORT_ATTRIBUTES = 0xC000_002E,
    PORT_MESSAGE_TOO_LONG = 0xC000_002F,
    INVALID_PARAMETER_MIX = 0xC000_0030,
    INVALID_QUOTA_LOWER = 0xC000_0031,
    DISK_CORRUPT_ERROR = 0xC000_0032,
    OBJECT_NAME_INVALID = 0xC000_0033,
    OBJECT_NAME_NOT_FOUND = 0xC000_0034,
    OBJECT_NAME_COLLISION = 0xC000_0035,
    PORT_DO_NOT_DISTURB = 0xC000_0036,
    PORT_DISCONNECTED = 0xC000_0037,
    DEVICE_ALREADY_ATTACHED = 0xC000_0038,
    OBJECT_PATH_INVALID = 0xC000_0039,
    OBJECT_PATH_NOT_FOUND = 0xC000_003A,
    OBJECT_PATH_SYNTAX_BAD = 0xC000_003B,
    DATA_OVERRUN = 0xC000_003C,
    DATA_LATE_ERROR = 0xC000_003D,
    DATA_ERROR = 0xC000_003E,
    CRC_ERROR = 0xC000_003F,
    SECTION_TOO_BIG = 0xC000_0040,
    PORT_CONNECTION_REFUSED = 0xC000_0041,
    INVALID_PORT_HANDLE = 0xC000_0042,
    SHARING_VIOLATION = 0xC000_0043,
    QUOTA_EXCEEDED = 0xC000_0044,
    INVALID_PAGE_PROTECTION = 0xC000_0045,
    MUTANT_NOT_OWNED = 0xC000_0046,
    SEMAPHORE_LIMIT_EXCEEDED = 0xC000_0047,
    PORT_ALREADY_SET = 0xC000_0048,
    SECTION_NOT_IMAGE = 0xC000_0049,
    SUSPEND_COUNT_EXCEEDED = 0xC000_004A,
    THREAD_IS_TERMINATING = 0xC000_004B,
    BAD_WORKING_SET_LIMIT = 0xC000_004C,
    INCOMPATIBLE_FILE_MAP = 0xC000_004D,
    SECTION_PROTECTION = 0xC000_004E,
    EAS_NOT_SUPPORTED = 0xC000_004F,
    EA_TOO_LARGE = 0xC000_0050,
    NONEXISTENT_EA_ENTRY = 0xC000_0051,
    NO_EAS_ON_FILE = 0xC000_0052,
    EA_CORRUPT_ERROR = 0xC000_0053,
    FILE_LOCK_CONFLICT = 0xC000_0054,
    LOCK_NOT_GRANTED = 0xC000_0055,
    DELETE_PENDING = 0xC000_0056,
    CTL_FILE_NOT_SUPPORTED = 0xC000_0057,
    UNKNOWN_REVISION = 0xC000_0058,
    REVISION_MISMATCH = 0xC000_0059,
    INVALID_OWNER = 0xC000_005A,
    INVALID_PRIMARY_GROUP = 0xC000_005B,
    NO_IMPERSONATION_TOKEN = 0xC000_005C,
    CANT_DISABLE_MANDATORY = 0xC000_005D,
    NO_LOGON_SERVERS = 0xC000_005E,
    NO_SUCH_LOGON_SESSION = 0xC000_005F,
    NO_SUCH_PRIVILEGE = 0xC000_0060,
    PRIVILEGE_NOT_HELD = 0xC000_0061,
    INVALID_ACCOUNT_NAME = 0xC000_0062,
    USER_EXISTS = 0xC000_0063,
    NO_SUCH_USER = 0xC000_0064,
    GROUP_EXISTS = 0xC000_0065,
    NO_SUCH_GROUP = 0xC000_0066,
    MEMBER_IN_GROUP = 0xC000_0067,
    MEMBER_NOT_IN_GROUP = 0xC000_0068,
    LAST_ADMIN = 0xC000_0069,
    WRONG_PASSWORD = 0xC000_006A,
    ILL_FORMED_PASSWORD = 0xC000_006B,
    PASSWORD_RESTRICTION = 0xC000_006C,
    LOGON_FAILURE = 0xC000_006D,
    ACCOUNT_RESTRICTION = 0xC000_006E,
    INVALID_LOGON_HOURS = 0xC000_006F,
    INVALID_WORKSTATION = 0xC000_0070,
    PASSWORD_EXPIRED = 0xC000_0071,
    ACCOUNT_DISABLED = 0xC000_0072,
    NONE_MAPPED = 0xC000_0073,
    TOO_MANY_LUIDS_REQUESTED = 0xC000_0074,
    LUIDS_EXHAUSTED = 0xC000_0075,
    INVALID_SUB_AUTHORITY = 0xC000_0076,
    INVALID_ACL = 0xC000_0077,
    INVALID_SID = 0xC000_0078,
    INVALID_SECURITY_DESCR = 0xC000_0079,
    PROCEDURE_NOT_FOUND = 0xC000_007A,
    INVALID_IMAGE_FORMAT = 0xC000_007B,
    NO_TOKEN = 0xC000_007C,
    BAD_INHERITANCE_ACL = 0xC000_007D,
    RANGE_NOT_LOCKED = 0xC000_007E,
    DISK_FULL = 0xC000_007F,
    SERVER_DISABLED = 0xC000_0080,
    SERVER_NOT_DISABLED = 0xC000_0081,
    TOO_MANY_GUIDS_REQUESTED = 0xC000_0082,
    GUIDS_EXHAUSTED = 0xC000_0083,
    INVALID_ID_AUTHORITY = 0xC000_0084,
    AGENTS_EXHAUSTED = 0xC000_0085,
    INVALID_VOLUME_LABEL = 0xC000_0086,
    SECTION_NOT_EXTENDED = 0xC000_0087,
    NOT_MAPPED_DATA = 0xC000_0088,
    RESOURCE_DATA_NOT_FOUND = 0xC000_0089,
    RESOURCE_TYPE_NOT_FOUND = 0xC000_008A,
    RESOURCE_NAME_NOT_FOUND = 0xC000_008B,
    ARRAY_BOUNDS_EXCEEDED = 0xC000_008C,
    FLOAT_DENORMAL_OPERAND = 0xC000_008D,
    FLOAT_DIVIDE_BY_ZERO = 0xC000_008E,
    FLOAT_INEXACT_RESULT = 0xC000_008F,
    FLOAT_INVALID_OPERATION = 0xC000_0090,
    FLOAT_OVERFLOW = 0xC000_0091,
    FLOAT_STACK_CHECK = 0xC000_0092,
    FLOAT_UNDERFLOW = 0xC000_0093,
    INTEGER_DIVIDE_BY_ZERO = 0xC000_0094,
    INTEGER_OVERFLOW = 0xC000_0095,
    PRIVILEGED_INSTRUCTION = 0xC000_0096,
    TOO_MANY_PAGING_FILES = 0xC000_0097,
    FILE_INVALID = 0xC000_0098,
    ALLOTTED_SPACE_EXCEEDED = 0xC000_0099,
    INSUFFICIENT_RESOURCES = 0xC000_009A,
    DFS_EXIT_PATH_FOUND = 0xC000_009B,
    DEVICE_DATA_ERROR = 0xC000_009C,
    DEVICE_NOT_CONNECTED = 0xC000_009D,
    DEVICE_POWER_FAILURE = 0xC000_009E,
    FREE_VM_NOT_AT_BASE = 0xC000_009F,
    MEMORY_NOT_ALLOCATED = 0xC000_00A0,
    WORKING_SET_QUOTA = 0xC000_00A1,
    MEDIA_WRITE_PROTECTED = 0xC000_00A2,
    DEVICE_NOT_READY = 0xC000_00A3,
    INVALID_GROUP_ATTRIBUTES = 0xC000_00A4,
    BAD_IMPERSONATION_LEVEL = 0xC000_00A5,
    CANT_OPEN_ANONYMOUS = 0xC000_00A6,
    BAD_VALIDATION_CLASS = 0xC000_00A7,
    BAD_TOKEN_TYPE = 0xC000_00A8,
    BAD_MASTER_BOOT_RECORD = 0xC000_00A9,
    INSTRUCTION_MISALIGNMENT = 0xC000_00AA,
    INSTANCE_NOT_AVAILABLE = 0xC000_00AB,
    PIPE_NOT_AVAILABLE = 0xC000_00AC,
    INVALID_PIPE_STATE = 0xC000_00AD,
    PIPE_BUSY = 0xC000_00AE,
    ILLEGAL_FUNCTION = 0xC000_00AF,
    PIPE_DISCONNECTED = 0xC000_00B0,
    PIPE_CLOSING = 0xC000_00B1,
    PIPE_CONNECTED = 0xC000_00B2,
    PIPE_LISTENING = 0xC000_00B3,
    INVALID_READ_MODE = 0xC000_00B4,
    IO_TIMEOUT = 0xC000_00B5,
    FILE_FORCED_CLOSED = 0xC000_00B6,
    PROFILING_NOT_STARTED = 0xC000_00B7,
    PROFILING_NOT_STOPPED = 0xC000_00B8,
    COULD_NOT_INTERPRET = 0xC000_00B9,
    FILE_IS_A_DIRECTORY = 0xC000_00BA,
    NOT_SUPPORTED = 0xC000_00BB,
    REMOTE_NOT_LISTENING = 0xC000_00BC,
    DUPLICATE_NAME = 0xC000_00BD,
    BAD_NETWORK_PATH = 0xC000_00BE,
    NETWORK_BUSY = 0xC000_00BF,
    DEVICE_DOES_NOT_EXIST = 0xC000_00C0,
    TOO_MANY_COMMANDS = 0xC000_00C1,
    ADAPTER_HARDWARE_ERROR = 0xC000_00C2,
    INVALID_NETWORK_RESPONSE = 0xC000_00C3,
    UNEXPECTED_NETWORK_ERROR = 0xC000_00C4,
    BAD_REMOTE_ADAPTER = 0xC000_00C5,
    PRINT_QUEUE_FULL = 0xC000_00C6,
    NO_SPOOL_SPACE = 0xC000_00C7,
    PRINT_CANCELLED = 0xC000_00C8,
    NETWORK_NAME_DELETED = 0xC000_00C9,
    NETWORK_ACCESS_DENIED = 0xC000_00CA,
    BAD_DEVICE_TYPE = 0xC000_00CB,
    BAD_NETWORK_NAME = 0xC000_00CC,
    TOO_MANY_NAMES = 0xC000_00CD,
    TOO_MANY_SESSIONS = 0xC000_00CE,
    SHARING_PAUSED = 0xC000_00CF,
    REQUEST_NOT_ACCEPTED = 0xC000_00D0,
    REDIRECTOR_PAUSED = 0xC000_00D1,
    NET_WRITE_FAULT = 0xC000_00D2,
    PROFILING_AT_LIMIT = 0xC000_00D3,
    NOT_SAME_DEVICE = 0xC000_00D4,
    FILE_RENAMED = 0xC000_00D5,
    VIRTUAL_CIRCUIT_CLOSED = 0xC000_00D6,
    NO_SECURITY_ON_OBJECT = 0xC000_00D7,
    CANT_WAIT = 0xC000_00D8,
    PIPE_EMPTY = 0xC000_00D9,
    CANT_ACCESS_DOMAIN_INFO = 0xC000_00DA,
    CANT_TERMINATE_SELF = 0xC000_00DB,
    INVALID_SERVER_STATE = 0xC000_00DC,
    INVALID_DOMAIN_STATE = 0xC000_00DD,
    INVALID_DOMAIN_ROLE = 0xC000_00DE,
    NO_SUCH_DOMAIN = 0xC000_00DF,
    DOMAIN_EXISTS = 0xC000_00E0,
    DOMAIN_LIMIT_EXCEEDED = 0xC000_00E1,
    OPLOCK_NOT_GRANTED = 0xC000_00E2,
    INVALID_OPLOCK_PROTOCOL = 0xC000_00E3,
    INTERNAL_DB_CORRUPTION = 0xC000_00E4,
    INTERNAL_ERROR = 0xC000_00E5,
    GENERIC_NOT_MAPPED = 0xC000_00E6,
    BAD_DESCRIPTOR_FORMAT = 0xC000_00E7,
    INVALID_USER_BUFFER = 0xC000_00E8,
    UNEXPECTED_IO_ERROR = 0xC000_00E9,
    UNEXPECTED_MM_CREATE_ERR = 0xC000_00EA,
    UNEXPECTED_MM_MAP_ERROR = 0xC000_00EB,
    UNEXPECTED_MM_EXTEND_ERR = 0xC000_00EC,
    NOT_LOGON_PROCESS = 0xC000_00ED,
    LOGON_SESSION_EXISTS = 0xC000_00EE,
    INVALID_PARAMETER_1 = 0xC000_00EF,
    INVALID_PARAMETER_2 = 0xC000_00F0,
    INVALID_PARAMETER_3 = 0xC000_00F1,
    INVALID_PARAMETER_4 = 0xC000_00F2,
    INVALID_PARAMETER_5 = 0xC000_00F3,
    INVALID_PARAMETER_6 = 0xC000_00F4,
    INVALID_PARAMETER_7 = 0xC000_00F5,
    INVALID_PARAMETER_8 = 0xC000_00F6,
    INVALID_PARAMETER_9 = 0xC000_00F7,
    INVALID_PARAMETER_10 = 0xC000_00F8,
    INVALID_PARAMETER_11 = 0xC000_00F9,
    INVALID_PARAMETER_12 = 0xC000_00FA,
    REDIRECTOR_NOT_STARTED = 0xC000_00FB,
    REDIRECTOR_STARTED = 0xC000_00FC,
    STACK_OVERFLOW = 0xC000_00FD,
    NO_SUCH_PACKAGE = 0xC000_00FE,
    BAD_FUNCTION_TABLE = 0xC000_00FF,
    VARIABLE_NOT_FOUND = 0xC000_0100,
    DIRECTORY_NOT_EMPTY = 0xC000_0101,
    FILE_CORRUPT_ERROR = 0xC000_0102,
    NOT_A_DIRECTORY = 0xC000_0103,
    BAD_LOGON_SESSION_STATE = 0xC000_0104,
    LOGON_SESSION_COLLISION = 0xC000_0105,
    NAME_TOO_LONG = 0xC000_0106,
    FILES_OPEN = 0xC000_0107,
    CONNECTION_IN_USE = 0xC000_0108,
    MESSAGE_NOT_FOUND = 0xC000_0109,
    PROCESS_IS_TERMINATING = 0xC000_010A,
    INVALID_LOGON_TYPE = 0xC000_010B,
    NO_GUID_TRANSLATION = 0xC000_010C,
    CANNOT_IMPERSONATE = 0xC000_010D,
    IMAGE_ALREADY_LOADED = 0xC000_010E,
    ABIOS_NOT_PRESENT = 0xC000_010F,
    ABIOS_LID_NOT_EXIST = 0xC000_0110,
    ABIOS_LID_ALREADY_OWNED = 0xC000_0111,
    ABIOS_NOT_LID_OWNER = 0xC000_0112,
    ABIOS_INVALID_COMMAND = 0xC000_0113,
    ABIOS_INVALID_LID = 0xC000_0114,
    ABIOS_SELECTOR_NOT_AVAILABLE = 0xC000_0115,
    ABIOS_INVALID_SELECTOR = 0xC000_0116,
    NO_LDT = 0xC000_0117,
    INVALID_LDT_SIZE = 0xC000_0118,
    INVALID_LDT_OFFSET = 0xC000_0119,
    INVALID_LDT_DESCRIPTOR = 0xC000_011A,
    INVALID_IMAGE_NE_FORMAT = 0xC000_011B,
    RXACT_INVALID_STATE = 0xC000_011C,
    RXACT_COMMIT_FAILURE = 0xC000_011D,
    MAPPED_FILE_SIZE_ZERO = 0xC000_011E,
    TOO_MANY_OPENED_FILES = 0xC000_011F,
    CANCELLED = 0xC000_0120,
    CANNOT_DELETE = 0xC000_0121,
    INVALID_COMPUTER_NAME = 0xC000_0122,
    FILE_DELETED = 0xC000_0123,
    SPECIAL_ACCOUNT = 0xC000_0124,
    SPECIAL_GROUP = 0xC000_0125,
    SPECIAL_USER = 0xC000_0126,
    MEMBERS_PRIMARY_GROUP = 0xC000_0127,
    FILE_CLOSED = 0xC000_0128,
    TOO_MANY_THREADS = 0xC000_0129,
    THREAD_NOT_IN_PROCESS = 0xC000_012A,
    TOKEN_ALREADY_IN_USE = 0xC000_012B,
    PAGEFILE_QUOTA_EXCEEDED = 0xC000_012C,
    COMMITMENT_LIMIT = 0xC000_012D,
    INVALID_IMAGE_LE_FORMAT = 0xC000_012E,
    INVALID_IMAGE_NOT_MZ = 0xC000_012F,
    INVALID_IMAGE_PROTECT = 0xC000_0130,
    INVALID_IMAGE_WIN_16 = 0xC000_0131,
    LOGON_SERVER_CONFLICT = 0xC000_0132,
    TIME_DIFFERENCE_AT_DC = 0xC000_0133,
    SYNCHRONIZATION_REQUIRED = 0xC000_0134,
    DLL_NOT_FOUND = 0xC000_0135,
    OPEN_FAILED = 0xC000_0136,
    IO_PRIVILEGE_FAILED = 0xC000_0137,
    ORDINAL_NOT_FOUND = 0xC000_0138,
    ENTRYPOINT_NOT_FOUND = 0xC000_0139,
    CONTROL_C_EXIT = 0xC000_013A,
    LOCAL_DISCONNECT = 0xC000_013B,
    REMOTE_DISCONNECT = 0xC000_013C,
    REMOTE_RESOURCES = 0xC000_013D,
    LINK_FAILED = 0xC000_013E,
    LINK_TIMEOUT = 0xC000_013F,
    INVALID_CONNECTION = 0xC000_0140,
    INVALID_ADDRESS = 0xC000_0141,
    DLL_INIT_FAILED = 0xC000_0142,
    MISSING_SYSTEMFILE = 0xC000_0143,
    UNHANDLED_EXCEPTION = 0xC000_0144,
    APP_INIT_FAILURE = 0xC000_0145,
    PAGEFILE_CREATE_FAILED = 0xC000_0146,
    NO_PAGEFILE = 0xC000_0147,
    INVALID_LEVEL = 0xC000_0148,
    WRONG_PASSWORD_CORE = 0xC000_0149,
    ILLEGAL_FLOAT_CONTEXT = 0xC000_014A,
    PIPE_BROKEN = 0xC000_014B,
    REGISTRY_CORRUPT = 0xC000_014C,
    REGISTRY_IO_FAILED = 0xC000_014D,
    NO_EVENT_PAIR = 0xC000_014E,
    UNRECOGNIZED_VOLUME = 0xC000_014F,
    SERIAL_NO_DEVICE_INITED = 0xC000_0150,
    NO_SUCH_ALIAS = 0xC000_0151,
    MEMBER_NOT_IN_ALIAS = 0xC000_0152,
    MEMBER_IN_ALIAS = 0xC000_0153,
    ALIAS_EXISTS = 0xC000_0154,
    LOGON_NOT_GRANTED = 0xC000_0155,
    TOO_MANY_SECRETS = 0xC000_0156,
    SECRET_TOO_LONG = 0xC000_0157,
    INTERNAL_DB_ERROR = 0xC000_0158,
    FULLSCREEN_MODE = 0xC000_0159,
    TOO_MANY_CONTEXT_IDS = 0xC000_015A,
    LOGON_TYPE_NOT_GRANTED = 0xC000_015B,
    NOT_REGISTRY_FILE = 0xC000_015C,
    NT_CROSS_ENCRYPTION_REQUIRED = 0xC000_015D,
    DOMAIN_CTRLR_CONFIG_ERROR = 0xC000_015E,
    FT_MISSING_MEMBER = 0xC000_015F,
    ILL_FORMED_SERVICE_ENTRY = 0xC000_0160,
    ILLEGAL_CHARACTER = 0xC000_0161,
    UNMAPPABLE_CHARACTER = 0xC000_0162,
    UNDEFINED_CHARACTER = 0xC000_0163,
    FLOPPY_VOLUME = 0xC000_0164,
    FLOPPY_ID_MARK_NOT_FOUND = 0xC000_0165,
    FLOPPY_WRONG_CYLINDER = 0xC000_0166,
    FLOPPY_UNKNOWN_ERROR = 0xC000_0167,
    FLOPPY_BAD_REGISTERS = 0xC000_0168,
    DISK_RECALIBRATE_FAILED = 0xC000_0169,
    DISK_OPERATION_FAILED = 0xC000_016A,
    DISK_RESET_FAILED = 0xC000_016B,
    SHARED_IRQ_BUSY = 0xC000_016C,
    FT_ORPHANING = 0xC000_016D,
    BIOS_FAILED_TO_CONNECT_INTERRUPT = 0xC000_016E,
    PARTITION_FAILURE = 0xC000_0172,
    INVALID_BLOCK_LENGTH = 0xC000_0173,
    DEVICE_NOT_PARTITIONED = 0xC000_0174,
    UNABLE_TO_LOCK_MEDIA = 0xC000_0175,
    UNABLE_TO_UNLOAD_MEDIA = 0xC000_0176,
    EOM_OVERFLOW = 0xC000_0177,
    NO_MEDIA = 0xC000_0178,
    NO_SUCH_MEMBER = 0xC000_017A,
    INVALID_MEMBER = 0xC000_017B,
    KEY_DELETED = 0xC000_017C,
    NO_LOG_SPACE = 0xC000_017D,
    TOO_MANY_SIDS = 0xC000_017E,
    LM_CROSS_ENCRYPTION_REQUIRED = 0xC000_017F,
    KEY_HAS_CHILDREN = 0xC000_0180,
    CHILD_MUST_BE_VOLATILE = 0xC000_0181,
    DEVICE_CONFIGURATION_ERROR = 0xC000_0182,
    DRIVER_INTERNAL_ERROR = 0xC000_0183,
    INVALID_DEVICE_STATE = 0xC000_0184,
    IO_DEVICE_ERROR = 0xC000_0185,
    DEVICE_PROTOCOL_ERROR = 0xC000_0186,
    BACKUP_CONTROLLER = 0xC000_0187,
    LOG_FILE_FULL = 0xC000_0188,
    TOO_LATE = 0xC000_0189,
    NO_TRUST_LSA_SECRET = 0xC000_018A,
    NO_TRUST_SAM_ACCOUNT = 0xC000_018B,
    TRUSTED_DOMAIN_FAILURE = 0xC000_018C,
    TRUSTED_RELATIONSHIP_FAILURE = 0xC000_018D,
    EVENTLOG_FILE_CORRUPT = 0xC000_018E,
    EVENTLOG_CANT_START = 0xC000_018F,
    TRUST_FAILURE = 0xC000_0190,
    MUTANT_LIMIT_EXCEEDED = 0xC000_0191,
    NETLOGON_NOT_STARTED = 0xC000_0192,
    ACCOUNT_EXPIRED = 0xC000_0193,
    POSSIBLE_DEADLOCK = 0xC000_0194,
    NETWORK_CREDENTIAL_CONFLICT = 0xC000_0195,
    REMOTE_SESSION_LIMIT = 0xC000_0196,
    EVENTLOG_FILE_CHANGED = 0xC000_0197,
    NOLOGON_INTERDOMAIN_TRUST_ACCOUNT = 0xC000_0198,
    NOLOGON_WORKSTATION_TRUST_ACCOUNT = 0xC000_0199,
    NOLOGON_SERVER_TRUST_ACCOUNT = 0xC000_019A,
    DOMAIN_TRUST_INCONSISTENT = 0xC000_019B,
    FS_DRIVER_REQUIRED = 0xC000_019C,
    IMAGE_ALREADY_LOADED_AS_DLL = 0xC000_019D,
    INCOMPATIBLE_WITH_GLOBAL_SHORT_NAME_REGISTRY_SETTING = 0xC000_019E,
    SHORT_NAMES_NOT_ENABLED_ON_VOLUME = 0xC000_019F,
    SECURITY_STREAM_IS_INCONSISTENT = 0xC000_01A0,
    INVALID_LOCK_RANGE = 0xC000_01A1,
    INVALID_ACE_CONDITION = 0xC000_01A2,
    IMAGE_SUBSYSTEM_NOT_PRESENT = 0xC000_01A3,
    NOTIFICATION_GUID_ALREADY_DEFINED = 0xC000_01A4,
    INVALID_EXCEPTION_HANDLER = 0xC000_01A5,
    DUPLICATE_PRIVILEGES = 0xC000_01A6,
    NOT_ALLOWED_ON_SYSTEM_FILE = 0xC000_01A7,
    REPAIR_NEEDED = 0xC000_01A8,
    QUOTA_NOT_ENABLED = 0xC000_01A9,
    NO_APPLICATION_PACKAGE = 0xC000_01AA,
    FILE_METADATA_OPTIMIZATION_IN_PROGRESS = 0xC000_01AB,
    NOT_SAME_OBJECT = 0xC000_01AC,
    FATAL_MEMORY_EXHAUSTION = 0xC000_01AD,
    ERROR_PROCESS_NOT_IN_JOB = 0xC000_01AE,
    CPU_SET_INVALID = 0xC000_01AF,
    IO_DEVICE_INVALID_DATA = 0xC000_01B0,
    IO_UNALIGNED_WRITE = 0xC000_01B1,
    CONTROL_STACK_VIOLATION = 0xC000_01B2,
    WEAK_WHFBKEY_BLOCKED = 0xC000_01B3,
    SERVER_TRANSPORT_CONFLICT = 0xC000_01B4,
    CERTIFICATE_VALIDATION_PREFERENCE_CONFLICT = 0xC000_01B5,
    NETWORK_OPEN_RESTRICTION = 0xC000_0201,
    NO_USER_SESSION_KEY = 0xC000_0202,
    USER_SESSION_DELETED = 0xC000_0203,
    RESOURCE_LANG_NOT_FOUND = 0xC000_0204,
    INSUFF_SERVER_RESOURCES = 0xC000_0205,
    INVALID_BUFFER_SIZE = 0xC000_0206,
    INVALID_ADDRESS_COMPONENT = 0xC000_0207,
    INVALID_ADDRESS_WILDCARD = 0xC000_0208,
    TOO_MANY_ADDRESSES = 0xC000_0209,
    ADDRESS_ALREADY_EXISTS = 0xC000_020A,
    ADDRESS_CLOSED = 0xC000_020B,
    CONNECTION_DISCONNECTED = 0xC000_020C,
    CONNECTION_RESET = 0xC000_020D,
    TOO_MANY_NODES = 0xC000_020E,
    TRANSACTION_ABORTED = 0xC000_020F,
    TRANSACTION_TIMED_OUT = 0xC000_0210,
    TRANSACTION_NO_RELEASE = 0xC000_0211,
    TRANSACTION_NO_MATCH = 0xC000_0212,
    TRANSACTION_RESPONDED = 0xC000_0213,
    TRANSACTION_INVALID_ID = 0xC000_0214,
    TRANSACTION_INVALID_TYPE = 0xC000_0215,
    NOT_SERVER_SESSION = 0xC000_0216,
    NOT_CLIENT_SESSION = 0xC000_0217,
    CANNOT_LOAD_REGISTRY_FILE = 0xC000_0218,
    DEBUG_ATTACH_FAILED = 0xC000_0219,
    SYSTEM_PROCESS_TERMINATED = 0xC000_021A,
    DATA_NOT_ACCEPTED = 0xC000_021B,
    NO_BROWSER_SERVERS_FOUND = 0xC000_021C,
    VDM_HARD_ERROR = 0xC000_021D,
    DRIVER_CANCEL_TIMEOUT = 0xC000_021E,
    REPLY_MESSAGE_MISMATCH = 0xC000_021F,
    MAPPED_ALIGNMENT = 0xC000_0220,
    IMAGE_CHECKSUM_MISMATCH = 0xC000_0221,
    LOST_WRITEBEHIND_DATA = 0xC000_0222,
    CLIENT_SERVER_PARAMETERS_INVALID = 0xC000_0223,
    PASSWORD_MUST_CHANGE = 0xC000_0224,
    NOT_FOUND = 0xC000_0225,
    NOT_TINY_STREAM = 0xC000_0226,
    RECOVERY_FAILURE = 0xC000_0227,
    STACK_OVERFLOW_READ = 0xC000_0228,
    FAIL_CHECK = 0xC000_0229,
    DUPLICATE_OBJECTID = 0xC000_022A,
    OBJECTID_EXISTS = 0xC000_022B,
    CONVERT_TO_LARGE = 0xC000_022C,
    RETRY = 0xC000_022D,
    FOUND_OUT_OF_SCOPE = 0xC000_022E,
    ALLOCATE_BUCKET = 0xC000_022F,
    PROPSET_NOT_FOUND = 0xC000_0230,
    MARSHALL_OVERFLOW = 0xC000_0231,
    INVALID_VARIANT = 0xC000_0232,
    DOMAIN_CONTROLLER_NOT_FOUND = 0xC000_0233,
    ACCOUNT_LOCKED_OUT = 0xC000_0234,
    HANDLE_NOT_CLOSABLE = 0xC000_0235,
    CONNECTION_REFUSED = 0xC000_0236,
    GRACEFUL_DISCONNECT = 0xC000_0237,
    ADDRESS_ALREADY_ASSOCIATED = 0xC000_0238,
    ADDRESS_NOT_ASSOCIATED = 0xC000_0239,
    CONNECTION_INVALID = 0xC000_023A,
    CONNECTION_ACTIVE = 0xC000_023B,
    NETWORK_UNREACHABLE = 0xC000_023C,
    HOST_UNREACHABLE = 0xC000_023D,
    PROTOCOL_UNREACHABLE = 0xC000_023E,
    PORT_UNREACHABLE = 0xC000_023F,
    REQUEST_ABORTED = 0xC000_0240,
    CONNECTION_ABORTED = 0xC000_0241,
    BAD_COMPRESSION_BUFFER = 0xC000_0242,
    USER_MAPPED_FILE = 0xC000_0243,
    AUDIT_FAILED = 0xC000_0244,
    TIMER_RESOLUTION_NOT_SET = 0xC000_0245,
    CONNECTION_COUNT_LIMIT = 0xC000_0246,
    LOGIN_TIME_RESTRICTION = 0xC000_0247,
    LOGIN_WKSTA_RESTRICTION = 0xC000_0248,
    IMAGE_MP_UP_MISMATCH = 0xC000_0249,
    INSUFFICIENT_LOGON_INFO = 0xC000_0250,
    BAD_DLL_ENTRYPOINT = 0xC000_0251,
    BAD_SERVICE_ENTRYPOINT = 0xC000_0252,
    LPC_REPLY_LOST = 0xC000_0253,
    IP_ADDRESS_CONFLICT1 = 0xC000_0254,
    IP_ADDRESS_CONFLICT2 = 0xC000_0255,
    REGISTRY_QUOTA_LIMIT = 0xC000_0256,
    PATH_NOT_COVERED = 0xC000_0257,
    NO_CALLBACK_ACTIVE = 0xC000_0258,
    LICENSE_QUOTA_EXCEEDED = 0xC000_0259,
    PWD_TOO_SHORT = 0xC000_025A,
    PWD_TOO_RECENT = 0xC000_025B,
    PWD_HISTORY_CONFLICT = 0xC000_025C,
    PLUGPLAY_NO_DEVICE = 0xC000_025E,
    UNSUPPORTED_COMPRESSION = 0xC000_025F,
    INVALID_HW_PROFILE = 0xC000_0260,
    INVALID_PLUGPLAY_DEVICE_PATH = 0xC000_0261,
    DRIVER_ORDINAL_NOT_FOUND = 0xC000_0262,
    DRIVER_ENTRYPOINT_NOT_FOUND = 0xC000_0263,
    RESOURCE_NOT_OWNED = 0xC000_0264,
    TOO_MANY_LINKS = 0xC000_0265,
    QUOTA_LIST_INCONSISTENT = 0xC000_0266,
    FILE_IS_OFFLINE = 0xC000_0267,
    EVALUATION_EXPIRATION = 0xC000_0268,
    ILLEGAL_DLL_RELOCATION = 0xC000_0269,
    LICENSE_VIOLATION = 0xC000_026A,
    DLL_INIT_FAILED_LOGOFF = 0xC000_026B,
    DRIVER_UNABLE_TO_LOAD = 0xC000_026C,
    DFS_UNAVAILABLE = 0xC000_026D,
    VOLUME_DISMOUNTED = 0xC000_026E,
    WX86_INTERNAL_ERROR = 0xC000_026F,
    WX86_FLOAT_STACK_CHECK = 0xC000_0270,
    VALIDATE_CONTINUE = 0xC000_0271,
    NO_MATCH = 0xC000_0272,
    NO_MORE_MATCHES = 0xC000_0273,
    NOT_A_REPARSE_POINT = 0xC000_0275,
    IO_REPARSE_TAG_INVALID = 0xC000_0276,
    IO_REPARSE_TAG_MISMATCH = 0xC000_0277,
    IO_REPARSE_DATA_INVALID = 0xC000_0278,
    IO_REPARSE_TAG_NOT_HANDLED = 0xC000_0279,
    PWD_TOO_LONG = 0xC000_027A,
    STOWED_EXCEPTION = 0xC000_027B,
    CONTEXT_STOWED_EXCEPTION = 0xC000_027C,
    REPARSE_POINT_NOT_RESOLVED = 0xC000_0280,
    DIRECTORY_IS_A_REPARSE_POINT = 0xC000_0281,
    RANGE_LIST_CONFLICT = 0xC000_0282,
    SOURCE_ELEMENT_EMPTY = 0xC000_0283,
    DESTINATION_ELEMENT_FULL = 0xC000_0284,
    ILLEGAL_ELEMENT_ADDRESS = 0xC000_0285,
    MAGAZINE_NOT_PRESENT = 0xC000_0286,
    REINITIALIZATION_NEEDED = 0xC000_0287,
    ENCRYPTION_FAILED = 0xC000_028A,
    DECRYPTION_FAILED = 0xC000_028B,
    RANGE_NOT_FOUND = 0xC000_028C,
    NO_RECOVERY_POLICY = 0xC000_028D,
    NO_EFS = 0xC000_028E,
    WRONG_EFS = 0xC000_028F,
    NO_USER_KEYS = 0xC000_0290,
    FILE_NOT_ENCRYPTED = 0xC000_0291,
    NOT_EXPORT_FORMAT = 0xC000_0292,
    FILE_ENCRYPTED = 0xC000_0293,
    WMI_GUID_NOT_FOUND = 0xC000_0295,
    WMI_INSTANCE_NOT_FOUND = 0xC000_0296,
    WMI_ITEMID_NOT_FOUND = 0xC000_0297,
    WMI_TRY_AGAIN = 0xC000_0298,
    SHARED_POLICY = 0xC000_0299,
    POLICY_OBJECT_NOT_FOUND = 0xC000_029A,
    POLICY_ONLY_IN_DS = 0xC000_029B,
    VOLUME_NOT_UPGRADED = 0xC000_029C,
    REMOTE_STORAGE_NOT_ACTIVE = 0xC000_029D,
    REMOTE_STORAGE_MEDIA_ERROR = 0xC000_029E,
    NO_TRACKING_SERVICE = 0xC000_029F,
    SERVER_SID_MISMATCH = 0xC000_02A0,
    DS_NO_ATTRIBUTE_OR_VALUE = 0xC000_02A1,
    DS_INVALID_ATTRIBUTE_SYNTAX = 0xC000_02A2,
    DS_ATTRIBUTE_TYPE_UNDEFINED = 0xC000_02A3,
    DS_ATTRIBUTE_OR_VALUE_EXISTS = 0xC000_02A4,
    DS_BUSY = 0xC000_02A5,
    DS_UNAVAILABLE = 0xC000_02A6,
    DS_NO_RIDS_ALLOCATED = 0xC000_02A7,
    DS_NO_MORE_RIDS = 0xC000_02A8,
    DS_INCORRECT_ROLE_OWNER = 0xC000_02A9,
    DS_RIDMGR_INIT_ERROR = 0xC000_02AA,
    DS_OBJ_CLASS_VIOLATION = 0xC000_02AB,
    DS_CANT_ON_NON_LEAF = 0xC000_02AC,
    DS_CANT_ON_RDN = 0xC000_02AD,
    DS_CANT_MOD_OBJ_CLASS = 0xC000_02AE,
    DS_CROSS_DOM_MOVE_FAILED = 0xC000_02AF,
    DS_GC_NOT_AVAILABLE = 0xC000_02B0,
    DIRECTORY_SERVICE_REQUIRED = 0xC000_02B1,
    REPARSE_ATTRIBUTE_CONFLICT = 0xC000_02B2,
    CANT_ENABLE_DENY_ONLY = 0xC000_02B3,
    FLOAT_MULTIPLE_FAULTS = 0xC000_02B4,
    FLOAT_MULTIPLE_TRAPS = 0xC000_02B5,
    DEVICE_REMOVED = 0xC000_02B6,
    JOURNAL_DELETE_IN_PROGRESS = 0xC000_02B7,
    JOURNAL_NOT_ACTIVE = 0xC000_02B8,
    NOINTERFACE = 0xC000_02B9,
    DS_RIDMGR_DISABLED = 0xC000_02BA,
    DS_ADMIN_LIMIT_EXCEEDED = 0xC000_02C1,
    DRIVER_FAILED_SLEEP = 0xC000_02C2,
    MUTUAL_AUTHENTICATION_FAILED = 0xC000_02C3,
    CORRUPT_SYSTEM_FILE = 0xC000_02C4,
    DATATYPE_MISALIGNMENT_ERROR = 0xC000_02C5,
    WMI_READ_ONLY = 0xC000_02C6,
    WMI_SET_FAILURE = 0xC000_02C7,
    COMMITMENT_MINIMUM = 0xC000_02C8,
    REG_NAT_CONSUMPTION = 0xC000_02C9,
    TRANSPORT_FULL = 0xC000_02CA,
    DS_SAM_INIT_FAILURE = 0xC000_02CB,
    ONLY_IF_CONNECTED = 0xC000_02CC,
    DS_SENSITIVE_GROUP_VIOLATION = 0xC000_02CD,
    PNP_RESTART_ENUMERATION = 0xC000_02CE,
    JOURNAL_ENTRY_DELETED = 0xC000_02CF,
    DS_CANT_MOD_PRIMARYGROUPID = 0xC000_02D0,
    SYSTEM_IMAGE_BAD_SIGNATURE = 0xC000_02D1,
    PNP_REBOOT_REQUIRED = 0xC000_02D2,
    POWER_STATE_INVALID = 0xC000_02D3,
    DS_INVALID_GROUP_TYPE = 0xC000_02D4,
    DS_NO_NEST_GLOBALGROUP_IN_MIXEDDOMAIN = 0xC000_02D5,
    DS_NO_NEST_LOCALGROUP_IN_MIXEDDOMAIN = 0xC000_02D6,
    DS_GLOBAL_CANT_HAVE_LOCAL_MEMBER = 0xC000_02D7,
    DS_GLOBAL_CANT_HAVE_UNIVERSAL_MEMBER = 0xC000_02D8,
    DS_UNIVERSAL_CANT_HAVE_LOCAL_MEMBER = 0xC000_02D9,
    DS_GLOBAL_CANT_HAVE_CROSSDOMAIN_MEMBER = 0xC000_02DA,
    DS_LOCAL_CANT_HAVE_CROSSDOMAIN_LOCAL_MEMBER = 0xC000_02DB,
    DS_HAVE_PRIMARY_MEMBERS = 0xC000_02DC,
    WMI_NOT_SUPPORTED = 0xC000_02DD,
    INSUFFICIENT_POWER = 0xC000_02DE,
    SAM_NEED_BOOTKEY_PASSWORD = 0xC000_02DF,
    SAM_NEED_BOOTKEY_FLOPPY = 0xC000_02E0,
    DS_CANT_START = 0xC000_02E1,
    DS_INIT_FAILURE = 0xC000_02E2,
    SAM_INIT_FAILURE = 0xC000_02E3,
    DS_GC_REQUIRED = 0xC000_02E4,
    DS_LOCAL_MEMBER_OF_LOCAL_ONLY = 0xC000_02E5,
    DS_NO_FPO_IN_UNIVERSAL_GROUPS = 0xC000_02E6,
    DS_MACHINE_ACCOUNT_QUOTA_EXCEEDED = 0xC000_02E7,
    MULTIPLE_FAULT_VIOLATION = 0xC000_02E8,
    CURRENT_DOMAIN_NOT_ALLOWED = 0xC000_02E9,
    CANNOT_MAKE = 0xC000_02EA,
    SYSTEM_SHUTDOWN = 0xC000_02EB,
    DS_INIT_FAILURE_CONSOLE = 0xC000_02EC,
    DS_SAM_INIT_FAILURE_CONSOLE = 0xC000_02ED,
    UNFINISHED_CONTEXT_DELETED = 0xC000_02EE,
    NO_TGT_REPLY = 0xC000_02EF,
    OBJECTID_NOT_FOUND = 0xC000_02F0,
    NO_IP_ADDRESSES = 0xC000_02F1,
    WRONG_CREDENTIAL_HANDLE = 0xC000_02F2,
    CRYPTO_SYSTEM_INVALID = 0xC000_02F3,
    MAX_REFERRALS_EXCEEDED = 0xC000_02F4,
    MUST_BE_KDC = 0xC000_02F5,
    STRONG_CRYPTO_NOT_SUPPORTED = 0xC000_02F6,
    TOO_MANY_PRINCIPALS = 0xC000_02F7,
    NO_PA_DATA = 0xC000_02F8,
    PKINIT_NAME_MISMATCH = 0xC000_02F9,
    SMARTCARD_LOGON_REQUIRED = 0xC000_02FA,
    KDC_INVALID_REQUEST = 0xC000_02FB,
    KDC_UNABLE_TO_REFER = 0xC000_02FC,
    KDC_UNKNOWN_ETYPE = 0xC000_02FD,
    SHUTDOWN_IN_PROGRESS = 0xC000_02FE,
    SERVER_SHUTDOWN_IN_PROGRESS = 0xC000_02FF,
    NOT_SUPPORTED_ON_SBS = 0xC000_0300,
    WMI_GUID_DISCONNECTED = 0xC000_0301,
    WMI_ALREADY_DISABLED = 0xC000_0302,
    WMI_ALREADY_ENABLED = 0xC000_0303,
    MFT_TOO_FRAGMENTED = 0xC000_0304,
    COPY_PROTECTION_FAILURE = 0xC000_0305,
    CSS_AUTHENTICATION_FAILURE = 0xC000_0306,
    CSS_KEY_NOT_PRESENT = 0xC000_0307,
    CSS_KEY_NOT_ESTABLISHED = 0xC000_0308,
    CSS_SCRAMBLED_SECTOR = 0xC000_0309,
    CSS_REGION_MISMATCH = 0xC000_030A,
    CSS_RESETS_EXHAUSTED = 0xC000_030B,
    PASSWORD_CHANGE_REQUIRED = 0xC000_030C,
    LOST_MODE_LOGON_RESTRICTION = 0xC000_030D,
    PKINIT_FAILURE = 0xC000_0320,
    SMARTCARD_SUBSYSTEM_FAILURE = 0xC000_0321,
    NO_KERB_KEY = 0xC000_0322,
    HOST_DOWN = 0xC000_0350,
    UNSUPPORTED_PREAUTH = 0xC000_0351,
    EFS_ALG_BLOB_TOO_BIG = 0xC000_0352,
    PORT_NOT_SET = 0xC000_0353,
    DEBUGGER_INACTIVE = 0xC000_0354,
    DS_VERSION_CHECK_FAILURE = 0xC000_0355,
    AUDITING_DISABLED = 0xC000_0356,
    PRENT4_MACHINE_ACCOUNT = 0xC000_0357,
    DS_AG_CANT_HAVE_UNIVERSAL_MEMBER = 0xC000_0358,
    INVALID_IMAGE_WIN_32 = 0xC000_0359,
    INVALID_IMAGE_WIN_64 = 0xC000_035A,
    BAD_BINDINGS = 0xC000_035B,
    NETWORK_SESSION_EXPIRED = 0xC000_035C,
    APPHELP_BLOCK = 0xC000_035D,
    ALL_SIDS_FILTERED = 0xC000_035E,
    NOT_SAFE_MODE_DRIVER = 0xC000_035F,
    ACCESS_DISABLED_BY_POLICY_DEFAULT = 0xC000_0361,
    ACCESS_DISABLED_BY_POLICY_PATH = 0xC000_0362,
    ACCESS_DISABLED_BY_POLICY_PUBLISHER = 0xC000_0363,
    ACCESS_DISABLED_BY_POLICY_OTHER = 0xC000_0364,
    FAILED_DRIVER_ENTRY = 0xC000_0365,
    DEVICE_ENUMERATION_ERROR = 0xC000_0366,
    MOUNT_POINT_NOT_RESOLVED = 0xC000_0368,
    INVALID_DEVICE_OBJECT_PARAMETER = 0xC000_0369,
    MCA_OCCURED = 0xC000_036A,
    DRIVER_BLOCKED_CRITICAL = 0xC000_036B,
    DRIVER_BLOCKED = 0xC000_036C,
    DRIVER_DATABASE_ERROR = 0xC000_036D,
    SYSTEM_HIVE_TOO_LARGE = 0xC000_036E,
    INVALID_IMPORT_OF_NON_DLL = 0xC000_036F,
    NO_SECRETS = 0xC000_0371,
    ACCESS_DISABLED_NO_SAFER_UI_BY_POLICY = 0xC000_0372,
    FAILED_STACK_SWITCH = 0xC000_0373,
    HEAP_CORRUPTION = 0xC000_0374,
    SMARTCARD_WRONG_PIN = 0xC000_0380,
    SMARTCARD_CARD_BLOCKED = 0xC000_0381,
    SMARTCARD_CARD_NOT_AUTHENTICATED = 0xC000_0382,
    SMARTCARD_NO_CARD = 0xC000_0383,
    SMARTCARD_NO_KEY_CONTAINER = 0xC000_0384,
    SMARTCARD_NO_CERTIFICATE = 0xC000_0385,
    SMARTCARD_NO_KEYSET = 0xC000_0386,
    SMARTCARD_IO_ERROR = 0xC000_0387,
    DOWNGRADE_DETECTED = 0xC000_0388,
    SMARTCARD_CERT_REVOKED = 0xC000_0389,
    ISSUING_CA_UNTRUSTED = 0xC000_038A,
    REVOCATION_OFFLINE_C = 0xC000_038B,
    PKINIT_CLIENT_FAILURE = 0xC000_038C,
    SMARTCARD_CERT_EXPIRED = 0xC000_038D,
    DRIVER_FAILED_PRIOR_UNLOAD = 0xC000_038E,
    SMARTCARD_SILENT_CONTEXT = 0xC000_038F,
    PER_USER_TRUST_QUOTA_EXCEEDED = 0xC000_0401,
    ALL_USER_TRUST_QUOTA_EXCEEDED = 0xC000_0402,
    USER_DELETE_TRUST_QUOTA_EXCEEDED = 0xC000_0403,
    DS_NAME_NOT_UNIQUE = 0xC000_0404,
    DS_DUPLICATE_ID_FOUND = 0xC000_0405,
    DS_GROUP_CONVERSION_ERROR = 0xC000_0406,
    VOLSNAP_PREPARE_HIBERNATE = 0xC000_0407,
    USER2USER_REQUIRED = 0xC000_0408,
    STACK_BUFFER_OVERRUN = 0xC000_0409,
    NO_S4U_PROT_SUPPORT = 0xC000_040A,
    CROSSREALM_DELEGATION_FAILURE = 0xC000_040B,
    REVOCATION_OFFLINE_KDC = 0xC000_040C,
    ISSUING_CA_UNTRUSTED_KDC = 0xC000_040D,
    KDC_CERT_EXPIRED = 0xC000_040E,
    KDC_CERT_REVOKED = 0xC000_040F,
    PARAMETER_QUOTA_EXCEEDED = 0xC000_0410,
    HIBERNATION_FAILURE = 0xC000_0411,
    DELAY_LOAD_FAILED = 0xC000_0412,
    AUTHENTICATION_FIREWALL_FAILED = 0xC000_0413,
    VDM_DISALLOWED = 0xC000_0414,
    HUNG_DISPLAY_DRIVER_THREAD = 0xC000_0415,
    INSUFFICIENT_RESOURCE_FOR_SPECIFIED_SHARED_SECTION_SIZE = 0xC000_0416,
    INVALID_CRUNTIME_PARAMETER = 0xC000_0417,
    NTLM_BLOCKED = 0xC000_0418,
    DS_SRC_SID_EXISTS_IN_FOREST = 0xC000_0419,
    DS_DOMAIN_NAME_EXISTS_IN_FOREST = 0xC000_041A,
    DS_FLAT_NAME_EXISTS_IN_FOREST = 0xC000_041B,
    INVALID_USER_PRINCIPAL_NAME = 0xC000_041C,
    FATAL_USER_CALLBACK_EXCEPTION = 0xC000_041D,
    ASSERTION_FAILURE = 0xC000_0420,
    VERIFIER_STOP = 0xC000_0421,
    CALLBACK_POP_STACK = 0xC000_0423,
    INCOMPATIBLE_DRIVER_BLOCKED = 0xC000_0424,
    HIVE_UNLOADED = 0xC000_0425,
    COMPRESSION_DISABLED = 0xC000_0426,
    FILE_SYSTEM_LIMITATION = 0xC000_0427,
    INVALID_IMAGE_HASH = 0xC000_0428,
    NOT_CAPABLE = 0xC000_0429,
    REQUEST_OUT_OF_SEQUENCE = 0xC000_042A,
    IMPLEMENTATION_LIMIT = 0xC000_042B,
    ELEVATION_REQUIRED = 0xC000_042C,
    NO_SECURITY_CONTEXT = 0xC000_042D,
    PKU2U_CERT_FAILURE = 0xC000_042F,
    BEYOND_VDL = 0xC000_0432,
    ENCOUNTERED_WRITE_IN_PROGRESS = 0xC000_0433,
    PTE_CHANGED = 0xC000_0434,
    PURGE_FAILED = 0xC000_0435,
    CRED_REQUIRES_CONFIRMATION = 0xC000_0440,
    CS_ENCRYPTION_INVALID_SERVER_RESPONSE = 0xC000_0441,
    CS_ENCRYPTION_UNSUPPORTED_SERVER = 0xC000_0442,
    CS_ENCRYPTION_EXISTING_ENCRYPTED_FILE = 0xC000_0443,
    CS_ENCRYPTION_NEW_ENCRYPTED_FILE = 0xC000_0444,
    CS_ENCRYPTION_FILE_NOT_CSE = 0xC000_0445,
    INVALID_LABEL = 0xC000_0446,
    DRIVER_PROCESS_TERMINATED = 0xC000_0450,
    AMBIGUOUS_SYSTEM_DEVICE = 0xC000_0451,
    SYSTEM_DEVICE_NOT_FOUND = 0xC000_0452,
    RESTART_BOOT_APPLICATION = 0xC000_0453,
    INSUFFICIENT_NVRAM_RESOURCES = 0xC000_0454,
    INVALID_SESSION = 0xC000_0455,
    THREAD_ALREADY_IN_SESSION = 0xC000_0456,
    THREAD_NOT_IN_SESSION = 0xC000_0457,
    INVALID_WEIGHT = 0xC000_0458,
    REQUEST_PAUSED = 0xC000_0459,
    NO_RANGES_PROCESSED = 0xC000_0460,
    DISK_RESOURCES_EXHAUSTED = 0xC000_0461,
    NEEDS_REMEDIATION = 0xC000_0462,
    DEVICE_FEATURE_NOT_SUPPORTED = 0xC000_0463,
    DEVICE_UNREACHABLE = 0xC000_0464,
    INVALID_TOKEN = 0xC000_0465,
    SERVER_UNAVAILABLE = 0xC000_0466,
    FILE_NOT_AVAILABLE = 0xC000_0467,
    DEVICE_INSUFFICIENT_RESOURCES = 0xC000_0468,
    PACKAGE_UPDATING = 0xC000_0469,
    NOT_READ_FROM_COPY = 0xC000_046A,
    FT_WRITE_FAILURE = 0xC000_046B,
    FT_DI_SCAN_REQUIRED = 0xC000_046C,
    OBJECT_NOT_EXTERNALLY_BACKED = 0xC000_046D,
    EXTERNAL_BACKING_PROVIDER_UNKNOWN = 0xC000_046E,
    COMPRESSION_NOT_BENEFICIAL = 0xC000_046F,
    DATA_CHECKSUM_ERROR = 0xC000_0470,
    INTERMIXED_KERNEL_EA_OPERATION = 0xC000_0471,
    TRIM_READ_ZERO_NOT_SUPPORTED = 0xC000_0472,
    TOO_MANY_SEGMENT_DESCRIPTORS = 0xC000_0473,
    INVALID_OFFSET_ALIGNMENT = 0xC000_0474,
    INVALID_FIELD_IN_PARAMETER_LIST = 0xC000_0475,
    OPERATION_IN_PROGRESS = 0xC000_0476,
    INVALID_INITIATOR_TARGET_PATH = 0xC000_0477,
    SCRUB_DATA_DISABLED = 0xC000_0478,
    NOT_REDUNDANT_STORAGE = 0xC000_0479,
    RESIDENT_FILE_NOT_SUPPORTED = 0xC000_047A,
    COMPRESSED_FILE_NOT_SUPPORTED = 0xC000_047B,
    DIRECTORY_NOT_SUPPORTED = 0xC000_047C,
    IO_OPERATION_TIMEOUT = 0xC000_047D,
    SYSTEM_NEEDS_REMEDIATION = 0xC000_047E,
    APPX_INTEGRITY_FAILURE_CLR_NGEN = 0xC000_047F,
    SHARE_UNAVAILABLE = 0xC000_0480,
    APISET_NOT_HOSTED = 0xC000_0481,
    APISET_NOT_PRESENT = 0xC000_0482,
    DEVICE_HARDWARE_ERROR = 0xC000_0483,
    FIRMWARE_SLOT_INVALID = 0xC000_0484,
    FIRMWARE_IMAGE_INVALID = 0xC000_0485,
    STORAGE_TOPOLOGY_ID_MISMATCH = 0xC000_0486,
    WIM_NOT_BOOTABLE = 0xC000_0487,
    BLOCKED_BY_PARENTAL_CONTROLS = 0xC000_0488,
    NEEDS_REGISTRATION = 0xC000_0489,
    QUOTA_ACTIVITY = 0xC000_048A,
    CALLBACK_INVOKE_INLINE = 0xC000_048B,
    BLOCK_TOO_MANY_REFERENCES = 0xC000_048C,
    MARKED_TO_DISALLOW_WRITES = 0xC000_048D,
    NETWORK_ACCESS_DENIED_EDP = 0xC000_048E,
    ENCLAVE_FAILURE = 0xC000_048F,
    PNP_NO_COMPAT_DRIVERS = 0xC000_0490,
    PNP_DRIVER_PACKAGE_NOT_FOUND = 0xC000_0491,
    PNP_DRIVER_CONFIGURATION_NOT_FOUND = 0xC000_0492,
    PNP_DRIVER_CONFIGURATION_INCOMPLETE = 0xC000_0493,
    PNP_FUNCTION_DRIVER_REQUIRED = 0xC000_0494,
    PNP_DEVICE_CONFIGURATION_PENDING = 0xC000_0495,
    DEVICE_HINT_NAME_BUFFER_TOO_SMALL = 0xC000_0496,
    PACKAGE_NOT_AVAILABLE = 0xC000_0497,
    DEVICE_IN_MAINTENANCE = 0xC000_0499,
    NOT_SUPPORTED_ON_DAX = 0xC000_049A,
    FREE_SPACE_TOO_FRAGMENTED = 0xC000_049B,
    DAX_MAPPING_EXISTS = 0xC000_049C,
    CHILD_PROCESS_BLOCKED = 0xC000_049D,
    STORAGE_LOST_DATA_PERSISTENCE = 0xC000_049E,
    PARTITION_TERMINATING = 0xC000_04A0,
    EXTERNAL_SYSKEY_NOT_SUPPORTED = 0xC000_04A1,
    ENCLAVE_VIOLATION = 0xC000_04A2,
    FILE_PROTECTED_UNDER_DPL = 0xC000_04A3,
    VOLUME_NOT_CLUSTER_ALIGNED = 0xC000_04A4,
    NO_PHYSICALLY_ALIGNED_FREE_SPACE_FOUND = 0xC000_04A5,
    APPX_FILE_NOT_ENCRYPTED = 0xC000_04A6,
    RWRAW_ENCRYPTED_FILE_NOT_ENCRYPTED = 0xC000_04A7,
    RWRAW_ENCRYPTED_INVALID_EDATAINFO_FILEOFFSET = 0xC000_04A8,
    RWRAW_ENCRYPTED_INVALID_EDATAINFO_FILERANGE = 0xC000_04A9,
    RWRAW_ENCRYPTED_INVALID_EDATAINFO_PARAMETER = 0xC000_04AA,
    FT_READ_FAILURE = 0xC000_04AB,
    PATCH_CONFLICT = 0xC000_04AC,
    STORAGE_RESERVE_ID_INVALID = 0xC000_04AD,
    STORAGE_RESERVE_DOES_NOT_EXIST = 0xC000_04AE,
    STORAGE_RESERVE_ALREADY_EXISTS = 0xC000_04AF,
    STORAGE_RESERVE_NOT_EMPTY = 0xC000_04B0,
    NOT_A_DAX_VOLUME = 0xC000_04B1,
    NOT_DAX_MAPPABLE = 0xC000_04B2,
    CASE_DIFFERING_NAMES_IN_DIR = 0xC000_04B3,
    FILE_NOT_SUPPORTED = 0xC000_04B4,
    NOT_SUPPORTED_WITH_BTT = 0xC000_04B5,
    ENCRYPTION_DISABLED = 0xC000_04B6,
    ENCRYPTING_METADATA_DISALLOWED = 0xC000_04B7,
    CANT_CLEAR_ENCRYPTION_FLAG = 0xC000_04B8,
    UNSATISFIED_DEPENDENCIES = 0xC000_04B9,
    CASE_SENSITIVE_PATH = 0xC000_04BA,
    UNSUPPORTED_PAGING_MODE = 0xC000_04BB,
    UNTRUSTED_MOUNT_POINT = 0xC000_04BC,
    HAS_SYSTEM_CRITICAL_FILES = 0xC000_04BD,
    OBJECT_IS_IMMUTABLE = 0xC000_04BE,
    FT_READ_FROM_COPY_FAILURE = 0xC000_04BF,
    IMAGE_LOADED_AS_PATCH_IMAGE = 0xC000_04C0,
    STORAGE_STACK_ACCESS_DENIED = 0xC000_04C1,
    INSUFFICIENT_VIRTUAL_ADDR_RESOURCES = 0xC000_04C2,
    ENCRYPTED_FILE_NOT_SUPPORTED = 0xC000_04C3,
    SPARSE_FILE_NOT_SUPPORTED = 0xC000_04C4,
    PAGEFILE_NOT_SUPPORTED = 0xC000_04C5,
    VOLUME_NOT_SUPPORTED = 0xC000_04C6,
    NOT_SUPPORTED_WITH_BYPASSIO = 0xC000_04C7,
    NO_BYPASSIO_DRIVER_SUPPORT = 0xC000_04C8,
    NOT_SUPPORTED_WITH_ENCRYPTION = 0xC000_04C9,
    NOT_SUPPORTED_WITH_COMPRESSION = 0xC000_04CA,
    NOT_SUPPORTED_WITH_REPLICATION = 0xC000_04CB,
    NOT_SUPPORTED_WITH_DEDUPLICATION = 0xC000_04CC,
    NOT_SUPPORTED_WITH_AUDITING = 0xC000_04CD,
    NOT_SUPPORTED_WITH_MONITORING = 0xC000_04CE,
    NOT_SUPPORTED_WITH_SNAPSHOT = 0xC000_04CF,
    NOT_SUPPORTED_WITH_VIRTUALIZATION = 0xC000_04D0,
    INDEX_OUT_OF_BOUNDS = 0xC000_04D1,
    BYPASSIO_FLT_NOT_SUPPORTED = 0xC000_04D2,
    VOLUME_WRITE_ACCESS_DENIED = 0xC000_04D3,
    PATCH_NOT_REGISTERED = 0xC000_04D4,
    NOT_SUPPORTED_WITH_CACHED_HANDLE = 0xC000_04D5,
    VOLUME_UPGRADE_NOT_NEEDED = 0xC000_04D9,
    VOLUME_UPGRADE_PENDING = 0xC000_04DA,
    VOLUME_UPGRADE_DISABLED = 0xC000_04DB,
    VOLUME_UPGRADE_DISABLED_TILL_OS_DOWNGRADE_EXPIRED = 0xC000_04DC,
    NOT_A_DEV_VOLUME = 0xC000_04DD,
    FS_GUID_MISMATCH = 0xC000_04DE,
    CANT_ATTACH_TO_DEV_VOLUME = 0xC000_04DF,
    INVALID_CONFIG_VALUE = 0xC000_04E0,
    INVALID_TASK_NAME = 0xC000_0500,
    INVALID_TASK_INDEX = 0xC000_0501,
    THREAD_ALREADY_IN_TASK = 0xC000_0502,
    CALLBACK_BYPASS = 0xC000_0503,
    UNDEFINED_SCOPE = 0xC000_0504,
    INVALID_CAP = 0xC000_0505,
    NOT_GUI_PROCESS = 0xC000_0506,
    DEVICE_HUNG = 0xC000_0507,
    CONTAINER_ASSIGNED = 0xC000_0508,
    JOB_NO_CONTAINER = 0xC000_0509,
    DEVICE_UNRESPONSIVE = 0xC000_050A,
    REPARSE_POINT_ENCOUNTERED = 0xC000_050B,
    ATTRIBUTE_NOT_PRESENT = 0xC000_050C,
    NOT_A_TIERED_VOLUME = 0xC000_050D,
    ALREADY_HAS_STREAM_ID = 0xC000_050E,
    JOB_NOT_EMPTY = 0xC000_050F,
    ALREADY_INITIALIZED = 0xC000_0510,
    ENCLAVE_NOT_TERMINATED = 0xC000_0511,
    ENCLAVE_IS_TERMINATING = 0xC000_0512,
    SMB1_NOT_AVAILABLE = 0xC000_0513,
    SMR_GARBAGE_COLLECTION_REQUIRED = 0xC000_0514,
    INTERRUPTED = 0xC000_0515,
    THREAD_NOT_RUNNING = 0xC000_0516,
    SESSION_KEY_TOO_SHORT = 0xC000_0517,
    FS_METADATA_INCONSISTENT = 0xC000_0518,
    FAIL_FAST_EXCEPTION = 0xC000_0602,
    IMAGE_CERT_REVOKED = 0xC000_0603,
    DYNAMIC_CODE_BLOCKED = 0xC000_0604,
    IMAGE_CERT_EXPIRED = 0xC000_0605,
    STRICT_CFG_VIOLATION = 0xC000_0606,
    SET_CONTEXT_DENIED = 0xC000_060A,
    CROSS_PARTITION_VIOLATION = 0xC000_060B,
    PORT_CLOSED = 0xC000_0700,
    MESSAGE_LOST = 0xC000_0701,
    INVALID_MESSAGE = 0xC000_0702,
    REQUEST_CANCELED = 0xC000_0703,
    RECURSIVE_DISPATCH = 0xC000_0704,
    LPC_RECEIVE_BUFFER_EXPECTED = 0xC000_0705,
    LPC_INVALID_CONNECTION_USAGE = 0xC000_0706,
    LPC_REQUESTS_NOT_ALLOWED = 0xC000_0707,
    RESOURCE_IN_USE = 0xC000_0708,
    HARDWARE_MEMORY_ERROR = 0xC000_0709,
    THREADPOOL_HANDLE_EXCEPTION = 0xC000_070A,
    THREADPOOL_SET_EVENT_ON_COMPLETION_FAILED = 0xC000_070B,
    THREADPOOL_RELEASE_SEMAPHORE_ON_COMPLETION_FAILED = 0xC000_070C,
    THREADPOOL_RELEASE_MUTEX_ON_COMPLETION_FAILED = 0xC000_070D,
    THREADPOOL_FREE_LIBRARY_ON_COMPLETION_FAILED = 0xC000_070E,
    THREADPOOL_RELEASED_DURING_OPERATION = 0xC000_070F,
    CALLBACK_RETURNED_WHILE_IMPERSONATING = 0xC000_0710,
    APC_RETURNED_WHILE_IMPERSONATING = 0xC000_0711,
    PROCESS_IS_PROTECTED = 0xC000_0712,
    MCA_EXCEPTION = 0xC000_0713,
    CERTIFICATE_MAPPING_NOT_UNIQUE = 0xC000_0714,
    SYMLINK_CLASS_DISABLED = 0xC000_0715,
    INVALID_IDN_NORMALIZATION = 0xC000_0716,
    NO_UNICODE_TRANSLATION = 0xC000_0717,
    ALREADY_REGISTERED = 0xC000_0718,
    CONTEXT_MISMATCH = 0xC000_0719,
    PORT_ALREADY_HAS_COMPLETION_LIST = 0xC000_071A,
    CALLBACK_RETURNED_THREAD_PRIORITY = 0xC000_071B,
    INVALID_THREAD = 0xC000_071C,
    CALLBACK_RETURNED_TRANSACTION = 0xC000_071D,
    CALLBACK_RETURNED_LDR_LOCK = 0xC000_071E,
    CALLBACK_RETURNED_LANG = 0xC000_071F,
    CALLBACK_RETURNED_PRI_BACK = 0xC000_0720,
    CALLBACK_RETURNED_THREAD_AFFINITY = 0xC000_0721,
    LPC_HANDLE_COUNT_EXCEEDED = 0xC000_0722,
    EXECUTABLE_MEMORY_WRITE = 0xC000_0723,
    KERNEL_EXECUTABLE_MEMORY_WRITE = 0xC000_0724,
    ATTACHED_EXECUTABLE_MEMORY_WRITE = 0xC000_0725,
    TRIGGERED_EXECUTABLE_MEMORY_WRITE = 0xC000_0726,
    DISK_REPAIR_DISABLED = 0xC000_0800,
    DS_DOMAIN_RENAME_IN_PROGRESS = 0xC000_0801,
    DISK_QUOTA_EXCEEDED = 0xC000_0802,
    CONTENT_BLOCKED = 0xC000_0804,
    BAD_CLUSTERS = 0xC000_0805,
    VOLUME_DIRTY = 0xC000_0806,
    DISK_REPAIR_UNSUCCESSFUL = 0xC000_0808,
    CORRUPT_LOG_OVERFULL = 0xC000_0809,
    CORRUPT_LOG_CORRUPTED = 0xC000_080A,
    CORRUPT_LOG_UNAVAILABLE = 0xC000_080B,
    CORRUPT_LOG_DELETED_FULL = 0xC000_080C,
    CORRUPT_LOG_CLEARED = 0xC000_080D,
    ORPHAN_NAME_EXHAUSTED = 0xC000_080E,
    PROACTIVE_SCAN_IN_PROGRESS = 0xC000_080F,
    ENCRYPTED_IO_NOT_POSSIBLE = 0xC000_0810,
    CORRUPT_LOG_UPLEVEL_RECORDS = 0xC000_0811,
    FILE_CHECKED_OUT = 0xC000_0901,
    CHECKOUT_REQUIRED = 0xC000_0902,
    BAD_FILE_TYPE = 0xC000_0903,
    FILE_TOO_LARGE = 0xC000_0904,
    FORMS_AUTH_REQUIRED = 0xC000_0905,
    VIRUS_INFECTED = 0xC000_0906,
    VIRUS_DELETED = 0xC000_0907,
    BAD_MCFG_TABLE = 0xC000_0908,
    CANNOT_BREAK_OPLOCK = 0xC000_0909,
    BAD_KEY = 0xC000_090A,
    BAD_DATA = 0xC000_090B,
    NO_KEY = 0xC000_090C,
    FILE_HANDLE_REVOKED = 0xC000_0910,
    SECTION_DIRECT_MAP_ONLY = 0xC000_0911,
    BLOCK_WEAK_REFERENCE_INVALID = 0xC000_0912,
    BLOCK_SOURCE_WEAK_REFERENCE_INVALID = 0xC000_0913,
    BLOCK_TARGET_WEAK_REFERENCE_INVALID = 0xC000_0914,
    BLOCK_SHARED = 0xC000_0915,
    VRF_VOLATILE_CFG_AND_IO_ENABLED = 0xC000_0C08,
    VRF_VOLATILE_NOT_STOPPABLE = 0xC000_0C09,
    VRF_VOLATILE_SAFE_MODE = 0xC000_0C0A,
    VRF_VOLATILE_NOT_RUNNABLE_SYSTEM = 0xC000_0C0B,
    VRF_VOLATILE_NOT_SUPPORTED_RULECLASS = 0xC000_0C0C,
    VRF_VOLATILE_PROTECTED_DRIVER = 0xC000_0C0D,
    VRF_VOLATILE_NMI_REGISTERED = 0xC000_0C0E,
    VRF_VOLATILE_SETTINGS_CONFLICT = 0xC000_0C0F,
    DIF_IOCALLBACK_NOT_REPLACED = 0xC000_0C76,
    DIF_LIVEDUMP_LIMIT_EXCEEDED = 0xC000_0C77,
    DIF_VOLATILE_SECTION_NOT_LOCKED = 0xC000_0C78,
    DIF_VOLATILE_DRIVER_HOTPATCHED = 0xC000_0C79,
    DIF_VOLATILE_INVALID_INFO = 0xC000_0C7A,
    DIF_VOLATILE_DRIVER_IS_NOT_RUNNING = 0xC000_0C7B,
    DIF_VOLATILE_PLUGIN_IS_NOT_RUNNING = 0xC000_0C7C,
    DIF_VOLATILE_PLUGIN_CHANGE_NOT_ALLOWED = 0xC000_0C7D,
    DIF_VOLATILE_NOT_ALLOWED = 0xC000_0C7E,
    DIF_BINDING_API_NOT_FOUND = 0xC000_0C7F,
    WOW_ASSERTION = 0xC000_9898,
    INVALID_SIGNATURE = 0xC000_A000,
    HMAC_NOT_SUPPORTED = 0xC000_A001,
    AUTH_TAG_MISMATCH = 0xC000_A002,
    INVALID_STATE_TRANSITION = 0xC000_A003,
    INVALID_KERNEL_INFO_VERSION = 0xC000_A004,
    INVALID_PEP_INFO_VERSION = 0xC000_A005,
    HANDLE_REVOKED = 0xC000_A006,
    EOF_ON_GHOSTED_RANGE = 0xC000_A007,
    CC_NEEDS_CALLBACK_SECTION_DRAIN = 0xC000_A008,
    IPSEC_QUEUE_OVERFLOW = 0xC000_A010,
    ND_QUEUE_OVERFLOW = 0xC000_A011,
    HOPLIMIT_EXCEEDED = 0xC000_A012,
    PROTOCOL_NOT_SUPPORTED = 0xC000_A013,
    FASTPATH_REJECTED = 0xC000_A014,
    LOST_WRITEBEHIND_DATA_NETWORK_DISCONNECTED = 0xC000_A080,
    LOST_WRITEBEHIND_DATA_NETWORK_SERVER_ERROR = 0xC000_A081,
    LOST_WRITEBEHIND_DATA_LOCAL_DISK_ERROR = 0xC000_A082,
    XML_PARSE_ERROR = 0xC000_A083,
    XMLDSIG_ERROR = 0xC000_A084,
    WRONG_COMPARTMENT = 0xC000_A085,
    AUTHIP_FAILURE = 0xC000_A086,
    DS_OID_MAPPED_GROUP_CANT_HAVE_MEMBERS = 0xC000_A087,
    DS_OID_NOT_FOUND = 0xC000_A088,
    INCORRECT_ACCOUNT_TYPE = 0xC000_A089,
    LOCAL_POLICY_MODIFICATION_NOT_SUPPORTED = 0xC000_A08A,
    POLICY_CONTROLLED_ACCOUNT = 0xC000_A08B,
    LAPS_LEGACY_SCHEMA_MISSING = 0xC000_A08C,
    LAPS_SCHEMA_MISSING = 0xC000_A08D,
    LAPS_ENCRYPTION_REQUIRES_2016_DFL = 0xC000_A08E,
    HASH_NOT_SUPPORTED = 0xC000_A100,
    HASH_NOT_PRESENT = 0xC000_A101,
    SECONDARY_IC_PROVIDER_NOT_REGISTERED = 0xC000_A121,
    GPIO_CLIENT_INFORMATION_INVALID = 0xC000_A122,
    GPIO_VERSION_NOT_SUPPORTED = 0xC000_A123,
    GPIO_INVALID_REGISTRATION_PACKET = 0xC000_A124,
    GPIO_OPERATION_DENIED = 0xC000_A125,
    GPIO_INCOMPATIBLE_CONNECT_MODE = 0xC000_A126,
    CANNOT_SWITCH_RUNLEVEL = 0xC000_A141,
    INVALID_RUNLEVEL_SETTING = 0xC000_A142,
    RUNLEVEL_SWITCH_TIMEOUT = 0xC000_A143,
    RUNLEVEL_SWITCH_AGENT_TIMEOUT = 0xC000_A145,
    RUNLEVEL_SWITCH_IN_PROGRESS = 0xC000_A146,
    NOT_APPCONTAINER = 0xC000_A200,
    NOT_SUPPORTED_IN_APPCONTAINER = 0xC000_A201,
    INVALID_PACKAGE_SID_LENGTH = 0xC000_A202,
    LPAC_ACCESS_DENIED = 0xC000_A203,
    ADMINLESS_ACCESS_DENIED = 0xC000_A204,
    APP_DATA_NOT_FOUND = 0xC000_A281,
    APP_DATA_EXPIRED = 0xC000_A282,
    APP_DATA_CORRUPT = 0xC000_A283,
    APP_DATA_LIMIT_EXCEEDED = 0xC000_A284,
    APP_DATA_REBOOT_REQUIRED = 0xC000_A285,
    OFFLOAD_READ_FLT_NOT_SUPPORTED = 0xC000_A2A1,
    OFFLOAD_WRITE_FLT_NOT_SUPPORTED = 0xC000_A2A2,
    OFFLOAD_READ_FILE_NOT_SUPPORTED = 0xC000_A2A3,
    OFFLOAD_WRITE_FILE_NOT_SUPPORTED = 0xC000_A2A4,
    WOF_WIM_HEADER_CORRUPT = 0xC000_A2A5,
    WOF_WIM_RESOURCE_TABLE_CORRUPT = 0xC000_A2A6,
    WOF_FILE_RESOURCE_TABLE_CORRUPT = 0xC000_A2A7,
    CIMFS_IMAGE_CORRUPT = 0xC000_C001,
    CIMFS_IMAGE_VERSION_NOT_SUPPORTED = 0xC000_C002,
    FILE_SYSTEM_VIRTUALIZATION_UNAVAILABLE = 0xC000_CE01,
    FILE_SYSTEM_VIRTUALIZATION_METADATA_CORRUPT = 0xC000_CE02,
    FILE_SYSTEM_VIRTUALIZATION_BUSY = 0xC000_CE03,
    FILE_SYSTEM_VIRTUALIZATION_PROVIDER_UNKNOWN = 0xC000_CE04,
    FILE_SYSTEM_VIRTUALIZATION_INVALID_OPERATION = 0xC000_CE05,
    CLOUD_FILE_SYNC_ROOT_METADATA_CORRUPT = 0xC000_CF00,
    CLOUD_FILE_PROVIDER_NOT_RUNNING = 0xC000_CF01,
    CLOUD_FILE_METADATA_CORRUPT = 0xC000_CF02,
    CLOUD_FILE_METADATA_TOO_LARGE = 0xC000_CF03,
    CLOUD_FILE_PROPERTY_VERSION_NOT_SUPPORTED = 0xC000_CF06,
    NOT_A_CLOUD_FILE = 0xC000_CF07,
    CLOUD_FILE_NOT_IN_SYNC = 0xC000_CF08,
    CLOUD_FILE_ALREADY_CONNECTED = 0xC000_CF09,
    CLOUD_FILE_NOT_SUPPORTED = 0xC000_CF0A,
    CLOUD_FILE_INVALID_REQUEST = 0xC000_CF0B,
    CLOUD_FILE_READ_ONLY_VOLUME = 0xC000_CF0C,
    CLOUD_FILE_CONNECTED_PROVIDER_ONLY = 0xC000_CF0D,
    CLOUD_FILE_VALIDATION_FAILED = 0xC000_CF0E,
    CLOUD_FILE_AUTHENTICATION_FAILED = 0xC000_CF0F,
    CLOUD_FILE_INSUFFICIENT_RESOURCES = 0xC000_CF10,
    CLOUD_FILE_NETWORK_UNAVAILABLE = 0xC000_CF11,
    CLOUD_FILE_UNSUCCESSFUL = 0xC000_CF12,
    CLOUD_FILE_NOT_UNDER_SYNC_ROOT = 0xC000_CF13,
    CLOUD_FILE_IN_USE = 0xC000_CF14,
    CLOUD_FILE_PINNED = 0xC000_CF15,
    CLOUD_FILE_REQUEST_ABORTED = 0xC000_CF16,
    CLOUD_FILE_PROPERTY_CORRUPT = 0xC000_CF17,
    CLOUD_FILE_ACCESS_DENIED = 0xC000_CF18,
    CLOUD_FILE_INCOMPATIBLE_HARDLINKS = 0xC000_CF19,
    CLOUD_FILE_PROPERTY_LOCK_CONFLICT = 0xC000_CF1A,
    CLOUD_FILE_REQUEST_CANCELED = 0xC000_CF1B,
    CLOUD_FILE_PROVIDER_TERMINATED = 0xC000_CF1D,
    NOT_A_CLOUD_SYNC_ROOT = 0xC000_CF1E,
    CLOUD_FILE_REQUEST_TIMEOUT = 0xC000_CF1F,
    CLOUD_FILE_DEHYDRATION_DISALLOWED = 0xC000_CF20,
    CLOUD_FILE_US_MESSAGE_TIMEOUT = 0xC000_CF21,
    FILE_SNAP_IN_PROGRESS = 0xC000_F500,
    FILE_SNAP_USER_SECTION_NOT_SUPPORTED = 0xC000_F501,
    FILE_SNAP_MODIFY_NOT_SUPPORTED = 0xC000_F502,
    FILE_SNAP_IO_NOT_COORDINATED = 0xC000_F503,
    FILE_SNAP_UNEXPECTED_ERROR = 0xC000_F504,
    FILE_SNAP_INVALID_PARAMETER = 0xC000_F505,

    // Error, facility 0x001
    DBG_NO_STATE_CHANGE = 0xC001_0001,
    DBG_APP_NOT_IDLE = 0xC001_0002,

    // Error, facility 0x002
    RPC_NT_INVALID_STRING_BINDING = 0xC002_0001,
    RPC_NT_WRONG_KIND_OF_BINDING = 0xC002_0002,
    RPC_NT_INVALID_BINDING = 0xC002_0003,
    RPC_NT_PROTSEQ_NOT_SUPPORTED = 0xC002_0004,
    RPC_NT_INVALID_RPC_PROTSEQ = 0xC002_0005,
    RPC_NT_INVALID_STRING_UUID = 0xC002_0006,
    RPC_NT_INVALID_ENDPOINT_FORMAT = 0xC002_0007,
    RPC_NT_INVALID_NET_ADDR = 0xC002_0008,
    RPC_NT_NO_ENDPOINT_FOUND = 0xC002_0009,
    RPC_NT_INVALID_TIMEOUT = 0xC002_000A,
    RPC_NT_OBJECT_NOT_FOUND = 0xC002_000B,
    RPC_NT_ALREADY_REGISTERED = 0xC002_000C,
    RPC_NT_TYPE_ALREADY_REGISTERED = 0xC002_000D,
    RPC_NT_ALREADY_LISTENING = 0xC002_000E,
    RPC_NT_NO_PROTSEQS_REGISTERED = 0xC002_000F,
    RPC_NT_NOT_LISTENING = 0xC002_0010,
    RPC_NT_UNKNOWN_MGR_TYPE = 0xC002_0011,
    RPC_NT_UNKNOWN_IF = 0xC002_0012,
    RPC_NT_NO_BINDINGS = 0xC002_0013,
    RPC_NT_NO_PROTSEQS = 0xC002_0014,
    RPC_NT_CANT_CREATE_ENDPOINT = 0xC002_0015,
    RPC_NT_OUT_OF_RESOURCES = 0xC002_0016,
    RPC_NT_SERVER_UNAVAILABLE = 0xC002_0017,
    RPC_NT_SERVER_TOO_BUSY = 0xC002_0018,
    RPC_NT_INVALID_NETWORK_OPTIONS = 0xC002_0019,
    RPC_NT_NO_CALL_ACTIVE = 0xC002_001A,
    RPC_NT_CALL_FAILED = 0xC002_001B,
    RPC_NT_CALL_FAILED_DNE = 0xC002_001C,
    RPC_NT_PROTOCOL_ERROR = 0xC002_001D,
    RPC_NT_UNSUPPORTED_TRANS_SYN = 0xC002_001F,
    RPC_NT_UNSUPPORTED_TYPE = 0xC002_0021,
    RPC_NT_INVALID_TAG = 0xC002_0022,
    RPC_NT_INVALID_BOUND = 0xC002_0023,
    RPC_NT_NO_ENTRY_NAME = 0xC002_0024,
    RPC_NT_INVALID_NAME_SYNTAX = 0xC002_0025,
    RPC_NT_UNSUPPORTED_NAME_SYNTAX = 0xC002_0026,
    RPC_NT_UUID_NO_ADDRESS = 0xC002_0028,
    RPC_NT_DUPLICATE_ENDPOINT = 0xC002_0029,
    RPC_NT_UNKNOWN_AUTHN_TYPE = 0xC002_002A,
    RPC_NT_MAX_CALLS_TOO_SMALL = 0xC002_002B,
    RPC_NT_STRING_TOO_LONG = 0xC002_002C,
    RPC_NT_PROTSEQ_NOT_FOUND = 0xC002_002D,
    RPC_NT_PROCNUM_OUT_OF_RANGE = 0xC002_002E,
    RPC_NT_BINDING_HAS_NO_AUTH = 0xC002_002F,
    RPC_NT_UNKNOWN_AUTHN_SERVICE = 0xC002_0030,
    RPC_NT_UNKNOWN_AUTHN_LEVEL = 0xC002_0031,
    RPC_NT_INVALID_AUTH_IDENTITY = 0xC002_0032,
    RPC_NT_UNKNOWN_AUTHZ_SERVICE = 0xC002_0033,
    EPT_NT_INVALID_ENTRY = 0xC002_0034,
    EPT_NT_CANT_PERFORM_OP = 0xC002_0035,
    EPT_NT_NOT_REGISTERED = 0xC002_0036,
    RPC_NT_NOTHING_TO_EXPORT = 0xC002_0037,
    RPC_NT_INCOMPLETE_NAME = 0xC002_0038,
    RPC_NT_INVALID_VERS_OPTION = 0xC002_0039,
    RPC_NT_NO_MORE_MEMBERS = 0xC002_003A,
    RPC_NT_NOT_ALL_OBJS_UNEXPORTED = 0xC002_003B,
    RPC_NT_INTERFACE_NOT_FOUND = 0xC002_003C,
    RPC_NT_ENTRY_ALREADY_EXISTS = 0xC002_003D,
    RPC_NT_ENTRY_NOT_FOUND = 0xC002_003E,
    RPC_NT_NAME_SERVICE_UNAVAILABLE = 0xC002_003F,
    RPC_NT_INVALID_NAF_ID = 0xC002_0040,
    RPC_NT_CANNOT_SUPPORT = 0xC002_0041,
    RPC_NT_NO_CONTEXT_AVAILABLE = 0xC002_0042,
    RPC_NT_INTERNAL_ERROR = 0xC002_0043,
    RPC_NT_ZERO_DIVIDE = 0xC002_0044,
    RPC_NT_ADDRESS_ERROR = 0xC002_0045,
    RPC_NT_FP_DIV_ZERO = 0xC002_0046,
    RPC_NT_FP_UNDERFLOW = 0xC002_0047,
    RPC_NT_FP_OVERFLOW = 0xC002_0048,
    RPC_NT_CALL_IN_PROGRESS = 0xC002_0049,
    RPC_NT_NO_MORE_BINDINGS = 0xC002_004A,
    RPC_NT_GROUP_MEMBER_NOT_FOUND = 0xC002_004B,
    EPT_NT_CANT_CREATE = 0xC002_004C,
    RPC_NT_INVALID_OBJECT = 0xC002_004D,
    RPC_NT_NO_INTERFACES = 0xC002_004F,
    RPC_NT_CALL_CANCELLED = 0xC002_0050,
    RPC_NT_BINDING_INCOMPLETE = 0xC002_0051,
    RPC_NT_COMM_FAILURE = 0xC002_0052,
    RPC_NT_UNSUPPORTED_AUTHN_LEVEL = 0xC002_0053,
    RPC_NT_NO_PRINC_NAME = 0xC002_0054,
    RPC_NT_NOT_RPC_ERROR = 0xC002_0055,
    RPC_NT_SEC_PKG_ERROR = 0xC002_0057,
    RPC_NT_NOT_CANCELLED = 0xC002_0058,
    RPC_NT_INVALID_ASYNC_HANDLE = 0xC002_0062,
    RPC_NT_INVALID_ASYNC_CALL = 0xC002_0063,
    RPC_NT_PROXY_ACCESS_DENIED = 0xC002_0064,
    RPC_NT_COOKIE_AUTH_FAILED = 0xC002_0065,

    // Error, facility 0x003
    RPC_NT_NO_MORE_ENTRIES = 0xC003_0001,
    RPC_NT_SS_CHAR_TRANS_OPEN_FAIL = 0xC003_0002,
    RPC_NT_SS_CHAR_TRANS_SHORT_FILE = 0xC003_0003,
    RPC_NT_SS_IN_NULL_CONTEXT = 0xC003_0004,
    RPC_NT_SS_CONTEXT_MISMATCH = 0xC003_0005,
    RPC_NT_SS_CONTEXT_DAMAGED = 0xC003_0006,
    RPC_NT_SS_HANDLES_MISMATCH = 0xC003_0007,
    RPC_NT_SS_CANNOT_GET_CALL_HANDLE = 0xC003_0008,
    RPC_NT_NULL_REF_POINTER = 0xC003_0009,
    RPC_NT_ENUM_VALUE_OUT_OF_RANGE = 0xC003_000A,
    RPC_NT_BYTE_COUNT_TOO_SMALL = 0xC003_000B,
    RPC_NT_BAD_STUB_DATA = 0xC003_000C,
    RPC_NT_INVALID_ES_ACTION = 0xC003_0059,
    RPC_NT_WRONG_ES_VERSION = 0xC003_005A,
    RPC_NT_WRONG_STUB_VERSION = 0xC003_005B,
    RPC_NT_INVALID_PIPE_OBJECT = 0xC003_005C,
    RPC_NT_INVALID_PIPE_OPERATION = 0xC003_005D,
    RPC_NT_WRONG_PIPE_VERSION = 0xC003_005E,
    RPC_NT_PIPE_CLOSED = 0xC003_005F,
    RPC_NT_PIPE_DISCIPLINE_ERROR = 0xC003_0060,
    RPC_NT_PIPE_EMPTY = 0xC003_0061,

    // Error, facility 0x004
    IO_ERR_INSUFFICIENT_RESOURCES = 0xC004_0002,
    IO_ERR_CONFIGURATION_ERROR = 0xC004_0003,
    IO_ERR_DRIVER_ERROR = 0xC004_0004,
    IO_ERR_PARITY = 0xC004_0005,
    IO_ERR_SEEK_ERROR = 0xC004_0006,
    IO_ERR_BAD_BLOCK = 0xC004_0007,
    IO_ERR_OVERRUN_ERROR = 0xC004_0008,
    IO_ERR_TIMEOUT = 0xC004_0009,
    IO_ERR_SEQUENCE = 0xC004_000A,
    IO_ERR_CONTROLLER_ERROR = 0xC004_000B,
    IO_ERR_INTERNAL_ERROR = 0xC004_000C,
    IO_ERR_INCORRECT_IRQL = 0xC004_000D,
    IO_ERR_INVALID_IOBASE = 0xC004_000E,
    IO_ERR_NOT_READY = 0xC004_000F,
    IO_ERR_INVALID_REQUEST = 0xC004_0010,
    IO_ERR_VERSION = 0xC004_0011,
    IO_ERR_LAYERED_FAILURE = 0xC004_0012,
    IO_ERR_RESET = 0xC004_0013,
    IO_ERR_PROTOCOL = 0xC004_0014,
    IO_ERR_MEMORY_CONFLICT_DETECTED = 0xC004_0015,
    IO_ERR_PORT_CONFLICT_DETECTED = 0xC004_0016,
    IO_ERR_DMA_CONFLICT_DETECTED = 0xC004_0017,
    IO_ERR_IRQ_CONFLICT_DETECTED = 0xC004_0018,
    IO_ERR_BAD_FIRMWARE = 0xC004_0019,
    IO_ERR_DMA_RESOURCE_CONFLICT = 0xC004_001B,
    IO_ERR_INTERRUPT_RESOURCE_CONFLICT = 0xC004_001C,
    IO_ERR_MEMORY_RESOURCE_CONFLICT = 0xC004_001D,
    IO_ERR_PORT_RESOURCE_CONFLICT = 0xC004_001E,
    IO_BAD_BLOCK_WITH_NAME = 0xC004_001F,
    IO_FILE_SYSTEM_CORRUPT = 0xC004_0029,
    IO_FILE_QUOTA_CORRUPT = 0xC004_002A,
    IO_SYSTEM_SLEEP_FAILED = 0xC004_002B,
    IO_DUMP_POINTER_FAILURE = 0xC004_002C,
    IO_DUMP_DRIVER_LOAD_FAILURE = 0xC004_002D,
    IO_DUMP_INITIALIZATION_FAILURE = 0xC004_002E,
    IO_DUMP_DUMPFILE_CONFLICT = 0xC004_002F,
    IO_DUMP_DIRECT_CONFIG_FAILED = 0xC004_0030,
    IO_DUMP_PAGE_CONFIG_FAILED = 0xC004_0031,
    PNP_BAD_MPS_TABLE = 0xC004_0035,
    PNP_TRANSLATION_FAILED = 0xC004_0036,
    PNP_IRQ_TRANSLATION_FAILED = 0xC004_0037,
    PNP_INVALID_ID = 0xC004_0038,
    IO_REISSUE_AS_CACHED = 0xC004_0039,
    IO_ERR_THREAD_STUCK_IN_DEVICE_DRIVER = 0xC004_006C,
    IO_ERR_PORT_TIMEOUT = 0xC004_0075,
    IO_ERROR_DISK_RESOURCES_EXHAUSTED = 0xC004_0096,
    IO_ERROR_IO_HARDWARE_ERROR = 0xC004_009A,
    IO_ERROR_DUMP_CREATION_ERROR = 0xC004_00A1,
    IO_DUMP_CALLBACK_EXCEPTION = 0xC004_00A3,
    IO_DUMP_INIT_DEDICATED_DUMP_FAILURE = 0xC004_00A4,

    // Error, facility 0x005
    MCA_ERROR_CACHE = 0xC005_003D,
    MCA_ERROR_TLB = 0xC005_003F,
    MCA_ERROR_CPU_BUS = 0xC005_0041,
    MCA_ERROR_REGISTER_FILE = 0xC005_0043,
    MCA_ERROR_MAS = 0xC005_0045,
    MCA_ERROR_MEM_UNKNOWN = 0xC005_0047,
    MCA_ERROR_MEM_1_2 = 0xC005_0049,
    MCA_ERROR_MEM_1_2_5 = 0xC005_004B,
    MCA_ERROR_MEM_1_2_5_4 = 0xC005_004D,
    MCA_ERROR_SYSTEM_EVENT = 0xC005_004F,
    MCA_ERROR_PCI_BUS_PARITY = 0xC005_0051,
    MCA_ERROR_PCI_BUS_PARITY_NO_INFO = 0xC005_0053,
    MCA_ERROR_PCI_BUS_SERR = 0xC005_0055,
    MCA_ERROR_PCI_BUS_SERR_NO_INFO = 0xC005_0057,
    MCA_ERROR_PCI_BUS_MASTER_ABORT = 0xC005_0059,
    MCA_ERROR_PCI_BUS_MASTER_ABORT_NO_INFO = 0xC005_005B,
    MCA_ERROR_PCI_BUS_TIMEOUT = 0xC005_005D,
    MCA_ERROR_PCI_BUS_TIMEOUT_NO_INFO = 0xC005_005F,
    MCA_ERROR_PCI_BUS_UNKNOWN = 0xC005_0061,
    MCA_ERROR_PCI_DEVICE = 0xC005_0063,
    MCA_ERROR_SMBIOS = 0xC005_0065,
    MCA_ERROR_PLATFORM_SPECIFIC = 0xC005_0067,
    MCA_ERROR_UNKNOWN = 0xC005_0069,
    MCA_ERROR_UNKNOWN_NO_CPU = 0xC005_006B,
    MCA_ERROR_CPU = 0xC005_0072,
    MCA_MEMORYHIERARCHY_ERROR = 0xC005_0078,
    MCA_TLB_ERROR = 0xC005_0079,
    MCA_BUS_ERROR = 0xC005_007A,
    MCA_BUS_TIMEOUT_ERROR = 0xC005_007B,
    MCA_INTERNALTIMER_ERROR = 0xC005_007C,
    MCA_MICROCODE_ROM_PARITY_ERROR = 0xC005_007E,
    MCA_EXTERNAL_ERROR = 0xC005_007F,
    MCA_FRC_ERROR = 0xC005_0080,

    // Error, facility 0x00A
    CTX_WINSTATION_NAME_INVALID = 0xC00A_0001,
    CTX_INVALID_PD = 0xC00A_0002,
    CTX_PD_NOT_FOUND = 0xC00A_0003,
    CTX_CLOSE_PENDING = 0xC00A_0006,
    CTX_NO_OUTBUF = 0xC00A_0007,
    CTX_MODEM_INF_NOT_FOUND = 0xC00A_0008,
    CTX_INVALID_MODEMNAME = 0xC00A_0009,
    CTX_RESPONSE_ERROR = 0xC00A_000A,
    CTX_MODEM_RESPONSE_TIMEOUT = 0xC00A_000B,
    CTX_MODEM_RESPONSE_NO_CARRIER = 0xC00A_000C,
    CTX_MODEM_RESPONSE_NO_DIALTONE = 0xC00A_000D,
    CTX_MODEM_RESPONSE_BUSY = 0xC00A_000E,
    CTX_MODEM_RESPONSE_VOICE = 0xC00A_000F,
    CTX_TD_ERROR = 0xC00A_0010,
    CTX_LICENSE_CLIENT_INVALID = 0xC00A_0012,
    CTX_LICENSE_NOT_AVAILABLE = 0xC00A_0013,
    CTX_LICENSE_EXPIRED = 0xC00A_0014,
    CTX_WINSTATION_NOT_FOUND = 0xC00A_0015,
    CTX_WINSTATION_NAME_COLLISION = 0xC00A_0016,
    CTX_WINSTATION_BUSY = 0xC00A_0017,
    CTX_BAD_VIDEO_MODE = 0xC00A_0018,
    CTX_GRAPHICS_INVALID = 0xC00A_0022,
    CTX_NOT_CONSOLE = 0xC00A_0024,
    CTX_CLIENT_QUERY_TIMEOUT = 0xC00A_0026,
    CTX_CONSOLE_DISCONNECT = 0xC00A_0027,
    CTX_CONSOLE_CONNECT = 0xC00A_0028,
    CTX_SHADOW_DENIED = 0xC00A_002A,
    CTX_WINSTATION_ACCESS_DENIED = 0xC00A_002B,
    CTX_INVALID_WD = 0xC00A_002E,
    CTX_WD_NOT_FOUND = 0xC00A_002F,
    CTX_SHADOW_INVALID = 0xC00A_0030,
    CTX_SHADOW_DISABLED = 0xC00A_0031,
    RDP_PROTOCOL_ERROR = 0xC00A_0032,
    CTX_CLIENT_LICENSE_NOT_SET = 0xC00A_0033,
    CTX_CLIENT_LICENSE_IN_USE = 0xC00A_0034,
    CTX_SHADOW_ENDED_BY_MODE_CHANGE = 0xC00A_0035,
    CTX_SHADOW_NOT_RUNNING = 0xC00A_0036,
    CTX_LOGON_DISABLED = 0xC00A_0037,
    CTX_SECURITY_LAYER_ERROR = 0xC00A_0038,
    TS_INCOMPATIBLE_SESSIONS = 0xC00A_0039,
    TS_VIDEO_SUBSYSTEM_ERROR = 0xC00A_003A,

    // Error, facility 0x00B
    MUI_FILE_NOT_FOUND = 0xC00B_0001,
    MUI_INVALID_FILE = 0xC00B_0002,
    MUI_INVALID_RC_CONFIG = 0xC00B_0003,
    MUI_INVALID_LOCALE_NAME = 0xC00B_0004,
    MUI_INVALID_ULTIMATEFALLBACK_NAME = 0xC00B_0005,
    MUI_FILE_NOT_LOADED = 0xC00B_0006,
    RESOURCE_ENUM_USER_STOP = 0xC00B_0007,

    // Error, facility 0x013
    CLUSTER_INVALID_NODE = 0xC013_0001,
    CLUSTER_NODE_EXISTS = 0xC013_0002,
    CLUSTER_JOIN_IN_PROGRESS = 0xC013_0003,
    CLUSTER_NODE_NOT_FOUND = 0xC013_0004,
    CLUSTER_LOCAL_NODE_NOT_FOUND = 0xC013_0005,
    CLUSTER_NETWORK_EXISTS = 0xC013_0006,
    CLUSTER_NETWORK_NOT_FOUND = 0xC013_0007,
    CLUSTER_NETINTERFACE_EXISTS = 0xC013_0008,
    CLUSTER_NETINTERFACE_NOT_FOUND = 0xC013_0009,
    CLUSTER_INVALID_REQUEST = 0xC013_000A,
    CLUSTER_INVALID_NETWORK_PROVIDER = 0xC013_000B,
    CLUSTER_NODE_DOWN = 0xC013_000C,
    CLUSTER_NODE_UNREACHABLE = 0xC013_000D,
    CLUSTER_NODE_NOT_MEMBER = 0xC013_000E,
    CLUSTER_JOIN_NOT_IN_PROGRESS = 0xC013_000F,
    CLUSTER_INVALID_NETWORK = 0xC013_0010,
    CLUSTER_NO_NET_ADAPTERS = 0xC013_0011,
    CLUSTER_NODE_UP = 0xC013_0012,
    CLUSTER_NODE_PAUSED = 0xC013_0013,
    CLUSTER_NODE_NOT_PAUSED = 0xC013_0014,
    CLUSTER_NO_SECURITY_CONTEXT = 0xC013_0015,
    CLUSTER_NETWORK_NOT_INTERNAL = 0xC013_0016,
    CLUSTER_POISONED = 0xC013_0017,
    CLUSTER_NON_CSV_PATH = 0xC013_0018,
    CLUSTER_CSV_VOLUME_NOT_LOCAL = 0xC013_0019,
    CLUSTER_CSV_READ_OPLOCK_BREAK_IN_PROGRESS = 0xC013_0020,
    CLUSTER_CSV_AUTO_PAUSE_ERROR = 0xC013_0021,
    CLUSTER_CSV_REDIRECTED = 0xC013_0022,
    CLUSTER_CSV_NOT_REDIRECTED = 0xC013_0023,
    CLUSTER_CSV_VOLUME_DRAINING = 0xC013_0024,
    CLUSTER_CSV_SNAPSHOT_CREATION_IN_PROGRESS = 0xC013_0025,
    CLUSTER_CSV_VOLUME_DRAINING_SUCCEEDED_DOWNLEVEL = 0xC013_0026,
    CLUSTER_CSV_NO_SNAPSHOTS = 0xC013_0027,
    CSV_IO_PAUSE_TIMEOUT = 0xC013_0028,
    CLUSTER_CSV_INVALID_HANDLE = 0xC013_0029,
    CLUSTER_CSV_SUPPORTED_ONLY_ON_COORDINATOR = 0xC013_0030,
    CLUSTER_CAM_TICKET_REPLAY_DETECTED = 0xC013_0031,

    // Error, facility 0x014
    ACPI_INVALID_OPCODE = 0xC014_0001,
    ACPI_STACK_OVERFLOW = 0xC014_0002,
    ACPI_ASSERT_FAILED = 0xC014_0003,
    ACPI_INVALID_INDEX = 0xC014_0004,
    ACPI_INVALID_ARGUMENT = 0xC014_0005,
    ACPI_FATAL = 0xC014_0006,
    ACPI_INVALID_SUPERNAME = 0xC014_0007,
    ACPI_INVALID_ARGTYPE = 0xC014_0008,
    ACPI_INVALID_OBJTYPE = 0xC014_0009,
    ACPI_INVALID_TARGETTYPE = 0xC014_000A,
    ACPI_INCORRECT_ARGUMENT_COUNT = 0xC014_000B,
    ACPI_ADDRESS_NOT_MAPPED = 0xC014_000C,
    ACPI_INVALID_EVENTTYPE = 0xC014_000D,
    ACPI_HANDLER_COLLISION = 0xC014_000E,
    ACPI_INVALID_DATA = 0xC014_000F,
    ACPI_INVALID_REGION = 0xC014_0010,
    ACPI_INVALID_ACCESS_SIZE = 0xC014_0011,
    ACPI_ACQUIRE_GLOBAL_LOCK = 0xC014_0012,
    ACPI_ALREADY_INITIALIZED = 0xC014_0013,
    ACPI_NOT_INITIALIZED = 0xC014_0014,
    ACPI_INVALID_MUTEX_LEVEL = 0xC014_0015,
    ACPI_MUTEX_NOT_OWNED = 0xC014_0016,
    ACPI_MUTEX_NOT_OWNER = 0xC014_0017,
    ACPI_RS_ACCESS = 0xC014_0018,
    ACPI_INVALID_TABLE = 0xC014_0019,
    ACPI_REG_HANDLER_FAILED = 0xC014_0020,
    ACPI_POWER_REQUEST_FAILED = 0xC014_0021,

    // Error, facility 0x015
    SXS_SECTION_NOT_FOUND = 0xC015_0001,
    SXS_CANT_GEN_ACTCTX = 0xC015_0002,
    SXS_INVALID_ACTCTXDATA_FORMAT = 0xC015_0003,
    SXS_ASSEMBLY_NOT_FOUND = 0xC015_0004,
    SXS_MANIFEST_FORMAT_ERROR = 0xC015_0005,
    SXS_MANIFEST_PARSE_ERROR = 0xC015_0006,
    SXS_ACTIVATION_CONTEXT_DISABLED = 0xC015_0007,
    SXS_KEY_NOT_FOUND = 0xC015_0008,
    SXS_VERSION_CONFLICT = 0xC015_0009,
    SXS_WRONG_SECTION_TYPE = 0xC015_000A,
    SXS_THREAD_QUERIES_DISABLED = 0xC015_000B,
    SXS_ASSEMBLY_MISSING = 0xC015_000C,
    SXS_PROCESS_DEFAULT_ALREADY_SET = 0xC015_000E,
    SXS_EARLY_DEACTIVATION = 0xC015_000F,
    SXS_INVALID_DEACTIVATION = 0xC015_0010,
    SXS_MULTIPLE_DEACTIVATION = 0xC015_0011,
    SXS_SYSTEM_DEFAULT_ACTIVATION_CONTEXT_EMPTY = 0xC015_0012,
    SXS_PROCESS_TERMINATION_REQUESTED = 0xC015_0013,
    SXS_CORRUPT_ACTIVATION_STACK = 0xC015_0014,
    SXS_CORRUPTION = 0xC015_0015,
    SXS_INVALID_IDENTITY_ATTRIBUTE_VALUE = 0xC015_0016,
    SXS_INVALID_IDENTITY_ATTRIBUTE_NAME = 0xC015_0017,
    SXS_IDENTITY_DUPLICATE_ATTRIBUTE = 0xC015_0018,
    SXS_IDENTITY_PARSE_ERROR = 0xC015_0019,
    SXS_COMPONENT_STORE_CORRUPT = 0xC015_001A,
    SXS_FILE_HASH_MISMATCH = 0xC015_001B,
    SXS_MANIFEST_IDENTITY_SAME_BUT_CONTENTS_DIFFERENT = 0xC015_001C,
    SXS_IDENTITIES_DIFFERENT = 0xC015_001D,
    SXS_ASSEMBLY_IS_NOT_A_DEPLOYMENT = 0xC015_001E,
    SXS_FILE_NOT_PART_OF_ASSEMBLY = 0xC015_001F,
    ADVANCED_INSTALLER_FAILED = 0xC015_0020,
    XML_ENCODING_MISMATCH = 0xC015_0021,
    SXS_MANIFEST_TOO_BIG = 0xC015_0022,
    SXS_SETTING_NOT_REGISTERED = 0xC015_0023,
    SXS_TRANSACTION_CLOSURE_INCOMPLETE = 0xC015_0024,
    SMI_PRIMITIVE_INSTALLER_FAILED = 0xC015_0025,
    GENERIC_COMMAND_FAILED = 0xC015_0026,
    SXS_FILE_HASH_MISSING = 0xC015_0027,

    // Error, facility 0x019
    TRANSACTIONAL_CONFLICT = 0xC019_0001,
    INVALID_TRANSACTION = 0xC019_0002,
    TRANSACTION_NOT_ACTIVE = 0xC019_0003,
    TM_INITIALIZATION_FAILED = 0xC019_0004,
    RM_NOT_ACTIVE = 0xC019_0005,
    RM_METADATA_CORRUPT = 0xC019_0006,
    TRANSACTION_NOT_JOINED = 0xC019_0007,
    DIRECTORY_NOT_RM = 0xC019_0008,
    TRANSACTIONS_UNSUPPORTED_REMOTE = 0xC019_000A,
    LOG_RESIZE_INVALID_SIZE = 0xC019_000B,
    REMOTE_FILE_VERSION_MISMATCH = 0xC019_000C,
    CRM_PROTOCOL_ALREADY_EXISTS = 0xC019_000F,
    TRANSACTION_PROPAGATION_FAILED = 0xC019_0010,
    CRM_PROTOCOL_NOT_FOUND = 0xC019_0011,
    TRANSACTION_SUPERIOR_EXISTS = 0xC019_0012,
    TRANSACTION_REQUEST_NOT_VALID = 0xC019_0013,
    TRANSACTION_NOT_REQUESTED = 0xC019_0014,
    TRANSACTION_ALREADY_ABORTED = 0xC019_0015,
    TRANSACTION_ALREADY_COMMITTED = 0xC019_0016,
    TRANSACTION_INVALID_MARSHALL_BUFFER = 0xC019_0017,
    CURRENT_TRANSACTION_NOT_VALID = 0xC019_0018,
    LOG_GROWTH_FAILED = 0xC019_0019,
    OBJECT_NO_LONGER_EXISTS = 0xC019_0021,
    STREAM_MINIVERSION_NOT_FOUND = 0xC019_0022,
    STREAM_MINIVERSION_NOT_VALID = 0xC019_0023,
    MINIVERSION_INACCESSIBLE_FROM_SPECIFIED_TRANSACTION = 0xC019_0024,
    CANT_OPEN_MINIVERSION_WITH_MODIFY_INTENT = 0xC019_0025,
    CANT_CREATE_MORE_STREAM_MINIVERSIONS = 0xC019_0026,
    HANDLE_NO_LONGER_VALID = 0xC019_0028,
    LOG_CORRUPTION_DETECTED = 0xC019_0030,
    RM_DISCONNECTED = 0xC019_0032,
    ENLISTMENT_NOT_SUPERIOR = 0xC019_0033,
    FILE_IDENTITY_NOT_PERSISTENT = 0xC019_0036,
    CANT_BREAK_TRANSACTIONAL_DEPENDENCY = 0xC019_0037,
    CANT_CROSS_RM_BOUNDARY = 0xC019_0038,
    TXF_DIR_NOT_EMPTY = 0xC019_0039,
    INDOUBT_TRANSACTIONS_EXIST = 0xC019_003A,
    TM_VOLATILE = 0xC019_003B,
    ROLLBACK_TIMER_EXPIRED = 0xC019_003C,
    TXF_ATTRIBUTE_CORRUPT = 0xC019_003D,
    EFS_NOT_ALLOWED_IN_TRANSACTION = 0xC019_003E,
    TRANSACTIONAL_OPEN_NOT_ALLOWED = 0xC019_003F,
    TRANSACTED_MAPPING_UNSUPPORTED_REMOTE = 0xC019_0040,
    TRANSACTION_REQUIRED_PROMOTION = 0xC019_0043,
    CANNOT_EXECUTE_FILE_IN_TRANSACTION = 0xC019_0044,
    TRANSACTIONS_NOT_FROZEN = 0xC019_0045,
    TRANSACTION_FREEZE_IN_PROGRESS = 0xC019_0046,
    NOT_SNAPSHOT_VOLUME = 0xC019_0047,
    NO_SAVEPOINT_WITH_OPEN_FILES = 0xC019_0048,
    SPARSE_NOT_ALLOWED_IN_TRANSACTION = 0xC019_0049,
    TM_IDENTITY_MISMATCH = 0xC019_004A,
    FLOATED_SECTION = 0xC019_004B,
    CANNOT_ACCEPT_TRANSACTED_WORK = 0xC019_004C,
    CANNOT_ABORT_TRANSACTIONS = 0xC019_004D,
    TRANSACTION_NOT_FOUND = 0xC019_004E,
    RESOURCEMANAGER_NOT_FOUND = 0xC019_004F,
    ENLISTMENT_NOT_FOUND = 0xC019_0050,
    TRANSACTIONMANAGER_NOT_FOUND = 0xC019_0051,
    TRANSACTIONMANAGER_NOT_ONLINE = 0xC019_0052,
    TRANSACTIONMANAGER_RECOVERY_NAME_COLLISION = 0xC019_0053,
    TRANSACTION_NOT_ROOT = 0xC019_0054,
    TRANSACTION_OBJECT_EXPIRED = 0xC019_0055,
    COMPRESSION_NOT_ALLOWED_IN_TRANSACTION = 0xC019_0056,
    TRANSACTION_RESPONSE_NOT_ENLISTED = 0xC019_0057,
    TRANSACTION_RECORD_TOO_LONG = 0xC019_0058,
    NO_LINK_TRACKING_IN_TRANSACTION = 0xC019_0059,
    OPERATION_NOT_SUPPORTED_IN_TRANSACTION = 0xC019_005A,
    TRANSACTION_INTEGRITY_VIOLATED = 0xC019_005B,
    TRANSACTIONMANAGER_IDENTITY_MISMATCH = 0xC019_005C,
    RM_CANNOT_BE_FROZEN_FOR_SNAPSHOT = 0xC019_005D,
    TRANSACTION_MUST_WRITETHROUGH = 0xC019_005E,
    TRANSACTION_NO_SUPERIOR = 0xC019_005F,
    EXPIRED_HANDLE = 0xC019_0060,
    TRANSACTION_NOT_ENLISTED = 0xC019_0061,

    // Error, facility 0x01A
    LOG_SECTOR_INVALID = 0xC01A_0001,
    LOG_SECTOR_PARITY_INVALID = 0xC01A_0002,
    LOG_SECTOR_REMAPPED = 0xC01A_0003,
    LOG_BLOCK_INCOMPLETE = 0xC01A_0004,
    LOG_INVALID_RANGE = 0xC01A_0005,
    LOG_BLOCKS_EXHAUSTED = 0xC01A_0006,
    LOG_READ_CONTEXT_INVALID = 0xC01A_0007,
    LOG_RESTART_INVALID = 0xC01A_0008,
    LOG_BLOCK_VERSION = 0xC01A_0009,
    LOG_BLOCK_INVALID = 0xC01A_000A,
    LOG_READ_MODE_INVALID = 0xC01A_000B,
    LOG_METADATA_CORRUPT = 0xC01A_000D,
    LOG_METADATA_INVALID = 0xC01A_000E,
    LOG_METADATA_INCONSISTENT = 0xC01A_000F,
    LOG_RESERVATION_INVALID = 0xC01A_0010,
    LOG_CANT_DELETE = 0xC01A_0011,
    LOG_CONTAINER_LIMIT_EXCEEDED = 0xC01A_0012,
    LOG_START_OF_LOG = 0xC01A_0013,
    LOG_POLICY_ALREADY_INSTALLED = 0xC01A_0014,
    LOG_POLICY_NOT_INSTALLED = 0xC01A_0015,
    LOG_POLICY_INVALID = 0xC01A_0016,
    LOG_POLICY_CONFLICT = 0xC01A_0017,
    LOG_PINNED_ARCHIVE_TAIL = 0xC01A_0018,
    LOG_RECORD_NONEXISTENT = 0xC01A_0019,
    LOG_RECORDS_RESERVED_INVALID = 0xC01A_001A,
    LOG_SPACE_RESERVED_INVALID = 0xC01A_001B,
    LOG_TAIL_INVALID = 0xC01A_001C,
    LOG_FULL = 0xC01A_001D,
    LOG_MULTIPLEXED = 0xC01A_001E,
    LOG_DEDICATED = 0xC01A_001F,
    LOG_ARCHIVE_NOT_IN_PROGRESS = 0xC01A_0020,
    LOG_ARCHIVE_IN_PROGRESS = 0xC01A_0021,
    LOG_EPHEMERAL = 0xC01A_0022,
    LOG_NOT_ENOUGH_CONTAINERS = 0xC01A_0023,
    LOG_CLIENT_ALREADY_REGISTERED = 0xC01A_0024,
    LOG_CLIENT_NOT_REGISTERED = 0xC01A_0025,
    LOG_FULL_HANDLER_IN_PROGRESS = 0xC01A_0026,
    LOG_CONTAINER_READ_FAILED = 0xC01A_0027,
    LOG_CONTAINER_WRITE_FAILED = 0xC01A_0028,
    LOG_CONTAINER_OPEN_FAILED = 0xC01A_0029,
    LOG_CONTAINER_STATE_INVALID = 0xC01A_002A,
    LOG_STATE_INVALID = 0xC01A_002B,
    LOG_PINNED = 0xC01A_002C,
    LOG_METADATA_FLUSH_FAILED = 0xC01A_002D,
    LOG_INCONSISTENT_SECURITY = 0xC01A_002E,
    LOG_APPENDED_FLUSH_FAILED = 0xC01A_002F,
    LOG_PINNED_RESERVATION = 0xC01A_0030,

    // Error, facility 0x01B
    VIDEO_HUNG_DISPLAY_DRIVER_THREAD = 0xC01B_00EA,

    // Error, facility 0x01C
    FLT_NO_HANDLER_DEFINED = 0xC01C_0001,
    FLT_CONTEXT_ALREADY_DEFINED = 0xC01C_0002,
    FLT_INVALID_ASYNCHRONOUS_REQUEST = 0xC01C_0003,
    FLT_DISALLOW_FAST_IO = 0xC01C_0004,
    FLT_INVALID_NAME_REQUEST = 0xC01C_0005,
    FLT_NOT_SAFE_TO_POST_OPERATION = 0xC01C_0006,
    FLT_NOT_INITIALIZED = 0xC01C_0007,
    FLT_FILTER_NOT_READY = 0xC01C_0008,
    FLT_POST_OPERATION_CLEANUP = 0xC01C_0009,
    FLT_INTERNAL_ERROR = 0xC01C_000A,
    FLT_DELETING_OBJECT = 0xC01C_000B,
    FLT_MUST_BE_NONPAGED_POOL = 0xC01C_000C,
    FLT_DUPLICATE_ENTRY = 0xC01C_000D,
    FLT_CBDQ_DISABLED = 0xC01C_000E,
    FLT_DO_NOT_ATTACH = 0xC01C_000F,
    FLT_DO_NOT_DETACH = 0xC01C_0010,
    FLT_INSTANCE_ALTITUDE_COLLISION = 0xC01C_0011,
    FLT_INSTANCE_NAME_COLLISION = 0xC01C_0012,
    FLT_FILTER_NOT_FOUND = 0xC01C_0013,
    FLT_VOLUME_NOT_FOUND = 0xC01C_0014,
    FLT_INSTANCE_NOT_FOUND = 0xC01C_0015,
    FLT_CONTEXT_ALLOCATION_NOT_FOUND = 0xC01C_0016,
    FLT_INVALID_CONTEXT_REGISTRATION = 0xC01C_0017,
    FLT_NAME_CACHE_MISS = 0xC01C_0018,
    FLT_NO_DEVICE_OBJECT = 0xC01C_0019,
    FLT_VOLUME_ALREADY_MOUNTED = 0xC01C_001A,
    FLT_ALREADY_ENLISTED = 0xC01C_001B,
    FLT_CONTEXT_ALREADY_LINKED = 0xC01C_001C,
    FLT_NO_WAITER_FOR_REPLY = 0xC01C_0020,
    FLT_REGISTRATION_BUSY = 0xC01C_0023,
    FLT_WCOS_NOT_SUPPORTED = 0xC01C_0024,

    // Error, facility 0x01D
    MONITOR_NO_DESCRIPTOR = 0xC01D_0001,
    MONITOR_UNKNOWN_DESCRIPTOR_FORMAT = 0xC01D_0002,
    MONITOR_INVALID_DESCRIPTOR_CHECKSUM = 0xC01D_0003,
    MONITOR_INVALID_STANDARD_TIMING_BLOCK = 0xC01D_0004,
    MONITOR_WMI_DATABLOCK_REGISTRATION_FAILED = 0xC01D_0005,
    MONITOR_INVALID_SERIAL_NUMBER_MONDSC_BLOCK = 0xC01D_0006,
    MONITOR_INVALID_USER_FRIENDLY_MONDSC_BLOCK = 0xC01D_0007,
    MONITOR_NO_MORE_DESCRIPTOR_DATA = 0xC01D_0008,
    MONITOR_INVALID_DETAILED_TIMING_BLOCK = 0xC01D_0009,
    MONITOR_INVALID_MANUFACTURE_DATE = 0xC01D_000A,

    // Error, facility 0x01E
    GRAPHICS_NOT_EXCLUSIVE_MODE_OWNER = 0xC01E_0000,
    GRAPHICS_INSUFFICIENT_DMA_BUFFER = 0xC01E_0001,
    GRAPHICS_INVALID_DISPLAY_ADAPTER = 0xC01E_0002,
    GRAPHICS_ADAPTER_WAS_RESET = 0xC01E_0003,
    GRAPHICS_INVALID_DRIVER_MODEL = 0xC01E_0004,
    GRAPHICS_PRESENT_MODE_CHANGED = 0xC01E_0005,
    GRAPHICS_PRESENT_OCCLUDED = 0xC01E_0006,
    GRAPHICS_PRESENT_DENIED = 0xC01E_0007,
    GRAPHICS_CANNOTCOLORCONVERT = 0xC01E_0008,
    GRAPHICS_DRIVER_MISMATCH = 0xC01E_0009,
    GRAPHICS_PRESENT_REDIRECTION_DISABLED = 0xC01E_000B,
    GRAPHICS_PRESENT_UNOCCLUDED = 0xC01E_000C,
    GRAPHICS_WINDOWDC_NOT_AVAILABLE = 0xC01E_000D,
    GRAPHICS_WINDOWLESS_PRESENT_DISABLED = 0xC01E_000E,
    GRAPHICS_PRESENT_INVALID_WINDOW = 0xC01E_000F,
    GRAPHICS_PRESENT_BUFFER_NOT_BOUND = 0xC01E_0010,
    GRAPHICS_VAIL_STATE_CHANGED = 0xC01E_0011,
    GRAPHICS_INDIRECT_DISPLAY_ABANDON_SWAPCHAIN = 0xC01E_0012,
    GRAPHICS_INDIRECT_DISPLAY_DEVICE_STOPPED = 0xC01E_0013,
    GRAPHICS_MPO_ALLOCATION_UNPINNED = 0xC01E_0018,
    GRAPHICS_NO_VIDEO_MEMORY = 0xC01E_0100,
    GRAPHICS_CANT_LOCK_MEMORY = 0xC01E_0101,
    GRAPHICS_ALLOCATION_BUSY = 0xC01E_0102,
    GRAPHICS_TOO_MANY_REFERENCES = 0xC01E_0103,
    GRAPHICS_TRY_AGAIN_LATER = 0xC01E_0104,
    GRAPHICS_TRY_AGAIN_NOW = 0xC01E_0105,
    GRAPHICS_ALLOCATION_INVALID = 0xC01E_0106,
    GRAPHICS_UNSWIZZLING_APERTURE_UNAVAILABLE = 0xC01E_0107,
    GRAPHICS_UNSWIZZLING_APERTURE_UNSUPPORTED = 0xC01E_0108,
    GRAPHICS_CANT_EVICT_PINNED_ALLOCATION = 0xC01E_0109,
    GRAPHICS_INVALID_ALLOCATION_USAGE = 0xC01E_0110,
    GRAPHICS_CANT_RENDER_LOCKED_ALLOCATION = 0xC01E_0111,
    GRAPHICS_ALLOCATION_CLOSED = 0xC01E_0112,
    GRAPHICS_INVALID_ALLOCATION_INSTANCE = 0xC01E_0113,
    GRAPHICS_INVALID_ALLOCATION_HANDLE = 0xC01E_0114,
    GRAPHICS_WRONG_ALLOCATION_DEVICE = 0xC01E_0115,
    GRAPHICS_ALLOCATION_CONTENT_LOST = 0xC01E_0116,
    GRAPHICS_GPU_EXCEPTION_ON_DEVICE = 0xC01E_0200,
    GRAPHICS_INVALID_VIDPN_TOPOLOGY = 0xC01E_0300,
    GRAPHICS_VIDPN_TOPOLOGY_NOT_SUPPORTED = 0xC01E_0301,
    GRAPHICS_VIDPN_TOPOLOGY_CURRENTLY_NOT_SUPPORTED = 0xC01E_0302,
    GRAPHICS_INVALID_VIDPN = 0xC01E_0303,
    GRAPHICS_INVALID_VIDEO_PRESENT_SOURCE = 0xC01E_0304,
    GRAPHICS_INVALID_VIDEO_PRESENT_TARGET = 0xC01E_0305,
    GRAPHICS_VIDPN_MODALITY_NOT_SUPPORTED = 0xC01E_0306,
    GRAPHICS_INVALID_VIDPN_SOURCEMODESET = 0xC01E_0308,
    GRAPHICS_INVALID_VIDPN_TARGETMODESET = 0xC01E_0309,
    GRAPHICS_INVALID_FREQUENCY = 0xC01E_030A,
    GRAPHICS_INVALID_ACTIVE_REGION = 0xC01E_030B,
    GRAPHICS_INVALID_TOTAL_REGION = 0xC01E_030C,
    GRAPHICS_INVALID_VIDEO_PRESENT_SOURCE_MODE = 0xC01E_0310,
    GRAPHICS_INVALID_VIDEO_PRESENT_TARGET_MODE = 0xC01E_0311,
    GRAPHICS_PINNED_MODE_MUST_REMAIN_IN_SET = 0xC01E_0312,
    GRAPHICS_PATH_ALREADY_IN_TOPOLOGY = 0xC01E_0313,
    GRAPHICS_MODE_ALREADY_IN_MODESET = 0xC01E_0314,
    GRAPHICS_INVALID_VIDEOPRESENTSOURCESET = 0xC01E_0315,
    GRAPHICS_INVALID_VIDEOPRESENTTARGETSET = 0xC01E_0316,
    GRAPHICS_SOURCE_ALREADY_IN_SET = 0xC01E_0317,
    GRAPHICS_TARGET_ALREADY_IN_SET = 0xC01E_0318,
    GRAPHICS_INVALID_VIDPN_PRESENT_PATH = 0xC01E_0319,
    GRAPHICS_NO_RECOMMENDED_VIDPN_TOPOLOGY = 0xC01E_031A,
    GRAPHICS_INVALID_MONITOR_FREQUENCYRANGESET = 0xC01E_031B,
    GRAPHICS_INVALID_MONITOR_FREQUENCYRANGE = 0xC01E_031C,
    GRAPHICS_FREQUENCYRANGE_NOT_IN_SET = 0xC01E_031D,
    GRAPHICS_FREQUENCYRANGE_ALREADY_IN_SET = 0xC01E_031F,
    GRAPHICS_STALE_MODESET = 0xC01E_0320,
    GRAPHICS_INVALID_MONITOR_SOURCEMODESET = 0xC01E_0321,
    GRAPHICS_INVALID_MONITOR_SOURCE_MODE = 0xC01E_0322,
    GRAPHICS_NO_RECOMMENDED_FUNCTIONAL_VIDPN = 0xC01E_0323,
    GRAPHICS_MODE_ID_MUST_BE_UNIQUE = 0xC01E_0324,
    GRAPHICS_EMPTY_ADAPTER_MONITOR_MODE_SUPPORT_INTERSECTION = 0xC01E_0325,
    GRAPHICS_VIDEO_PRESENT_TARGETS_LESS_THAN_SOURCES = 0xC01E_0326,
    GRAPHICS_PATH_NOT_IN_TOPOLOGY = 0xC01E_0327,
    GRAPHICS_ADAPTER_MUST_HAVE_AT_LEAST_ONE_SOURCE = 0xC01E_0328,
    GRAPHICS_ADAPTER_MUST_HAVE_AT_LEAST_ONE_TARGET = 0xC01E_0329,
    GRAPHICS_INVALID_MONITORDESCRIPTORSET = 0xC01E_032A,
    GRAPHICS_INVALID_MONITORDESCRIPTOR = 0xC01E_032B,
    GRAPHICS_MONITORDESCRIPTOR_NOT_IN_SET = 0xC01E_032C,
    GRAPHICS_MONITORDESCRIPTOR_ALREADY_IN_SET = 0xC01E_032D,
    GRAPHICS_MONITORDESCRIPTOR_ID_MUST_BE_UNIQUE = 0xC01E_032E,
    GRAPHICS_INVALID_VIDPN_TARGET_SUBSET_TYPE = 0xC01E_032F,
    GRAPHICS_RESOURCES_NOT_RELATED = 0xC01E_0330,
    GRAPHICS_SOURCE_ID_MUST_BE_UNIQUE = 0xC01E_0331,
    GRAPHICS_TARGET_ID_MUST_BE_UNIQUE = 0xC01E_0332,
    GRAPHICS_NO_AVAILABLE_VIDPN_TARGET = 0xC01E_0333,
    GRAPHICS_MONITOR_COULD_NOT_BE_ASSOCIATED_WITH_ADAPTER = 0xC01E_0334,
    GRAPHICS_NO_VIDPNMGR = 0xC01E_0335,
    GRAPHICS_NO_ACTIVE_VIDPN = 0xC01E_0336,
    GRAPHICS_STALE_VIDPN_TOPOLOGY = 0xC01E_0337,
    GRAPHICS_MONITOR_NOT_CONNECTED = 0xC01E_0338,
    GRAPHICS_SOURCE_NOT_IN_TOPOLOGY = 0xC01E_0339,
    GRAPHICS_INVALID_PRIMARYSURFACE_SIZE = 0xC01E_033A,
    GRAPHICS_INVALID_VISIBLEREGION_SIZE = 0xC01E_033B,
    GRAPHICS_INVALID_STRIDE = 0xC01E_033C,
    GRAPHICS_INVALID_PIXELFORMAT = 0xC01E_033D,
    GRAPHICS_INVALID_COLORBASIS = 0xC01E_033E,
    GRAPHICS_INVALID_PIXELVALUEACCESSMODE = 0xC01E_033F,
    GRAPHICS_TARGET_NOT_IN_TOPOLOGY = 0xC01E_0340,
    GRAPHICS_NO_DISPLAY_MODE_MANAGEMENT_SUPPORT = 0xC01E_0341,
    GRAPHICS_VIDPN_SOURCE_IN_USE = 0xC01E_0342,
    GRAPHICS_CANT_ACCESS_ACTIVE_VIDPN = 0xC01E_0343,
    GRAPHICS_INVALID_PATH_IMPORTANCE_ORDINAL = 0xC01E_0344,
    GRAPHICS_INVALID_PATH_CONTENT_GEOMETRY_TRANSFORMATION = 0xC01E_0345,
    GRAPHICS_PATH_CONTENT_GEOMETRY_TRANSFORMATION_NOT_SUPPORTED = 0xC01E_0346,
    GRAPHICS_INVALID_GAMMA_RAMP = 0xC01E_0347,
    GRAPHICS_GAMMA_RAMP_NOT_SUPPORTED = 0xC01E_0348,
    GRAPHICS_MULTISAMPLING_NOT_SUPPORTED = 0xC01E_0349,
    GRAPHICS_MODE_NOT_IN_MODESET = 0xC01E_034A,
    GRAPHICS_INVALID_VIDPN_TOPOLOGY_RECOMMENDATION_REASON = 0xC01E_034D,
    GRAPHICS_INVALID_PATH_CONTENT_TYPE = 0xC01E_034E,
    GRAPHICS_INVALID_COPYPROTECTION_TYPE = 0xC01E_034F,
    GRAPHICS_UNASSIGNED_MODESET_ALREADY_EXISTS = 0xC01E_0350,
    GRAPHICS_INVALID_SCANLINE_ORDERING = 0xC01E_0352,
    GRAPHICS_TOPOLOGY_CHANGES_NOT_ALLOWED = 0xC01E_0353,
    GRAPHICS_NO_AVAILABLE_IMPORTANCE_ORDINALS = 0xC01E_0354,
    GRAPHICS_INCOMPATIBLE_PRIVATE_FORMAT = 0xC01E_0355,
    GRAPHICS_INVALID_MODE_PRUNING_ALGORITHM = 0xC01E_0356,
    GRAPHICS_INVALID_MONITOR_CAPABILITY_ORIGIN = 0xC01E_0357,
    GRAPHICS_INVALID_MONITOR_FREQUENCYRANGE_CONSTRAINT = 0xC01E_0358,
    GRAPHICS_MAX_NUM_PATHS_REACHED = 0xC01E_0359,
    GRAPHICS_CANCEL_VIDPN_TOPOLOGY_AUGMENTATION = 0xC01E_035A,
    GRAPHICS_INVALID_CLIENT_TYPE = 0xC01E_035B,
    GRAPHICS_CLIENTVIDPN_NOT_SET = 0xC01E_035C,
    GRAPHICS_SPECIFIED_CHILD_ALREADY_CONNECTED = 0xC01E_0400,
    GRAPHICS_CHILD_DESCRIPTOR_NOT_SUPPORTED = 0xC01E_0401,
    GRAPHICS_NOT_A_LINKED_ADAPTER = 0xC01E_0430,
    GRAPHICS_LEADLINK_NOT_ENUMERATED = 0xC01E_0431,
    GRAPHICS_CHAINLINKS_NOT_ENUMERATED = 0xC01E_0432,
    GRAPHICS_ADAPTER_CHAIN_NOT_READY = 0xC01E_0433,
    GRAPHICS_CHAINLINKS_NOT_STARTED = 0xC01E_0434,
    GRAPHICS_CHAINLINKS_NOT_POWERED_ON = 0xC01E_0435,
    GRAPHICS_INCONSISTENT_DEVICE_LINK_STATE = 0xC01E_0436,
    GRAPHICS_NOT_POST_DEVICE_DRIVER = 0xC01E_0438,
    GRAPHICS_ADAPTER_ACCESS_NOT_EXCLUDED = 0xC01E_043B,
    GRAPHICS_OPM_NOT_SUPPORTED = 0xC01E_0500,
    GRAPHICS_COPP_NOT_SUPPORTED = 0xC01E_0501,
    GRAPHICS_UAB_NOT_SUPPORTED = 0xC01E_0502,
    GRAPHICS_OPM_INVALID_ENCRYPTED_PARAMETERS = 0xC01E_0503,
    GRAPHICS_OPM_NO_PROTECTED_OUTPUTS_EXIST = 0xC01E_0505,
    GRAPHICS_OPM_INTERNAL_ERROR = 0xC01E_050B,
    GRAPHICS_OPM_INVALID_HANDLE = 0xC01E_050C,
    GRAPHICS_PVP_INVALID_CERTIFICATE_LENGTH = 0xC01E_050E,
    GRAPHICS_OPM_SPANNING_MODE_ENABLED = 0xC01E_050F,
    GRAPHICS_OPM_THEATER_MODE_ENABLED = 0xC01E_0510,
    GRAPHICS_PVP_HFS_FAILED = 0xC01E_0511,
    GRAPHICS_OPM_INVALID_SRM = 0xC01E_0512,
    GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_HDCP = 0xC01E_0513,
    GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_ACP = 0xC01E_0514,
    GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_CGMSA = 0xC01E_0515,
    GRAPHICS_OPM_HDCP_SRM_NEVER_SET = 0xC01E_0516,
    GRAPHICS_OPM_RESOLUTION_TOO_HIGH = 0xC01E_0517,
    GRAPHICS_OPM_ALL_HDCP_HARDWARE_ALREADY_IN_USE = 0xC01E_0518,
    GRAPHICS_OPM_PROTECTED_OUTPUT_NO_LONGER_EXISTS = 0xC01E_051A,
    GRAPHICS_OPM_PROTECTED_OUTPUT_DOES_NOT_HAVE_COPP_SEMANTICS = 0xC01E_051C,
    GRAPHICS_OPM_INVALID_INFORMATION_REQUEST = 0xC01E_051D,
    GRAPHICS_OPM_DRIVER_INTERNAL_ERROR = 0xC01E_051E,
    GRAPHICS_OPM_PROTECTED_OUTPUT_DOES_NOT_HAVE_OPM_SEMANTICS = 0xC01E_051F,
    GRAPHICS_OPM_SIGNALING_NOT_SUPPORTED = 0xC01E_0520,
    GRAPHICS_OPM_INVALID_CONFIGURATION_REQUEST = 0xC01E_0521,
    GRAPHICS_I2C_NOT_SUPPORTED = 0xC01E_0580,
    GRAPHICS_I2C_DEVICE_DOES_NOT_EXIST = 0xC01E_0581,
    GRAPHICS_I2C_ERROR_TRANSMITTING_DATA = 0xC01E_0582,
    GRAPHICS_I2C_ERROR_RECEIVING_DATA = 0xC01E_0583,
    GRAPHICS_DDCCI_VCP_NOT_SUPPORTED = 0xC01E_0584,
    GRAPHICS_DDCCI_INVALID_DATA = 0xC01E_0585,
    GRAPHICS_DDCCI_MONITOR_RETURNED_INVALID_TIMING_STATUS_BYTE = 0xC01E_0586,
    GRAPHICS_DDCCI_INVALID_CAPABILITIES_STRING = 0xC01E_0587,
    GRAPHICS_MCA_INTERNAL_ERROR = 0xC01E_0588,
    GRAPHICS_DDCCI_INVALID_MESSAGE_COMMAND = 0xC01E_0589,
    GRAPHICS_DDCCI_INVALID_MESSAGE_LENGTH = 0xC01E_058A,
    GRAPHICS_DDCCI_INVALID_MESSAGE_CHECKSUM = 0xC01E_058B,
    GRAPHICS_INVALID_PHYSICAL_MONITOR_HANDLE = 0xC01E_058C,
    GRAPHICS_MONITOR_NO_LONGER_EXISTS = 0xC01E_058D,
    GRAPHICS_ONLY_CONSOLE_SESSION_SUPPORTED = 0xC01E_05E0,
    GRAPHICS_NO_DISPLAY_DEVICE_CORRESPONDS_TO_NAME = 0xC01E_05E1,
    GRAPHICS_DISPLAY_DEVICE_NOT_ATTACHED_TO_DESKTOP = 0xC01E_05E2,
    GRAPHICS_MIRRORING_DEVICES_NOT_SUPPORTED = 0xC01E_05E3,
    GRAPHICS_INVALID_POINTER = 0xC01E_05E4,
    GRAPHICS_NO_MONITORS_CORRESPOND_TO_DISPLAY_DEVICE = 0xC01E_05E5,
    GRAPHICS_PARAMETER_ARRAY_TOO_SMALL = 0xC01E_05E6,
    GRAPHICS_INTERNAL_ERROR = 0xC01E_05E7,
    GRAPHICS_SESSION_TYPE_CHANGE_IN_PROGRESS = 0xC01E_05E8,

    // Error, facility 0x021
    FVE_LOCKED_VOLUME = 0xC021_0000,
    FVE_NOT_ENCRYPTED = 0xC021_0001,
    FVE_BAD_INFORMATION = 0xC021_0002,
    FVE_TOO_SMALL = 0xC021_0003,
    FVE_FAILED_WRONG_FS = 0xC021_0004,
    FVE_BAD_PARTITION_SIZE = 0xC021_0005,
    FVE_FS_NOT_EXTENDED = 0xC021_0006,
    FVE_FS_MOUNTED = 0xC021_0007,
    FVE_NO_LICENSE = 0xC021_0008,
    FVE_ACTION_NOT_ALLOWED = 0xC021_0009,
    FVE_BAD_DATA = 0xC021_000A,
    FVE_VOLUME_NOT_BOUND = 0xC021_000B,
    FVE_NOT_DATA_VOLUME = 0xC021_000C,
    FVE_CONV_READ_ERROR = 0xC021_000D,
    FVE_CONV_WRITE_ERROR = 0xC021_000E,
    FVE_OVERLAPPED_UPDATE = 0xC021_000F,
    FVE_FAILED_SECTOR_SIZE = 0xC021_0010,
    FVE_FAILED_AUTHENTICATION = 0xC021_0011,
    FVE_NOT_OS_VOLUME = 0xC021_0012,
    FVE_KEYFILE_NOT_FOUND = 0xC021_0013,
    FVE_KEYFILE_INVALID = 0xC021_0014,
    FVE_KEYFILE_NO_VMK = 0xC021_0015,
    FVE_TPM_DISABLED = 0xC021_0016,
    FVE_TPM_SRK_AUTH_NOT_ZERO = 0xC021_0017,
    FVE_TPM_INVALID_PCR = 0xC021_0018,
    FVE_TPM_NO_VMK = 0xC021_0019,
    FVE_PIN_INVALID = 0xC021_001A,
    FVE_AUTH_INVALID_APPLICATION = 0xC021_001B,
    FVE_AUTH_INVALID_CONFIG = 0xC021_001C,
    FVE_DEBUGGER_ENABLED = 0xC021_001D,
    FVE_DRY_RUN_FAILED = 0xC021_001E,
    FVE_BAD_METADATA_POINTER = 0xC021_001F,
    FVE_OLD_METADATA_COPY = 0xC021_0020,
    FVE_REBOOT_REQUIRED = 0xC021_0021,
    FVE_RAW_ACCESS = 0xC021_0022,
    FVE_RAW_BLOCKED = 0xC021_0023,
    FVE_NO_AUTOUNLOCK_MASTER_KEY = 0xC021_0024,
    FVE_MOR_FAILED = 0xC021_0025,
    FVE_NO_FEATURE_LICENSE = 0xC021_0026,
    FVE_POLICY_USER_DISABLE_RDV_NOT_ALLOWED = 0xC021_0027,
    FVE_CONV_RECOVERY_FAILED = 0xC021_0028,
    FVE_VIRTUALIZED_SPACE_TOO_BIG = 0xC021_0029,
    FVE_INVALID_DATUM_TYPE = 0xC021_002A,
    FVE_VOLUME_TOO_SMALL = 0xC021_0030,
    FVE_ENH_PIN_INVALID = 0xC021_0031,
    FVE_FULL_ENCRYPTION_NOT_ALLOWED_ON_TP_STORAGE = 0xC021_0032,
    FVE_WIPE_NOT_ALLOWED_ON_TP_STORAGE = 0xC021_0033,
    FVE_NOT_ALLOWED_ON_CSV_STACK = 0xC021_0034,
    FVE_NOT_ALLOWED_ON_CLUSTER = 0xC021_0035,
    FVE_NOT_ALLOWED_TO_UPGRADE_WHILE_CONVERTING = 0xC021_0036,
    FVE_WIPE_CANCEL_NOT_APPLICABLE = 0xC021_0037,
    FVE_EDRIVE_DRY_RUN_FAILED = 0xC021_0038,
    FVE_SECUREBOOT_DISABLED = 0xC021_0039,
    FVE_SECUREBOOT_CONFIG_CHANGE = 0xC021_003A,
    FVE_DEVICE_LOCKEDOUT = 0xC021_003B,
    FVE_VOLUME_EXTEND_PREVENTS_EOW_DECRYPT = 0xC021_003C,
    FVE_NOT_DE_VOLUME = 0xC021_003D,
    FVE_PROTECTION_DISABLED = 0xC021_003E,
    FVE_PROTECTION_CANNOT_BE_DISABLED = 0xC021_003F,
    FVE_OSV_KSR_NOT_ALLOWED = 0xC021_0040,
    FVE_EDRIVE_BAND_ENUMERATION_FAILED = 0xC021_0041,
    FVE_POLICY_ON_RDV_EXCLUSION_LIST = 0xC021_0042,
    FVE_DATASET_FULL = 0xC021_0043,
    FVE_METADATA_FULL = 0xC021_0044,

    // Error, facility 0x022
    FWP_CALLOUT_NOT_FOUND = 0xC022_0001,
    FWP_CONDITION_NOT_FOUND = 0xC022_0002,
    FWP_FILTER_NOT_FOUND = 0xC022_0003,
    FWP_LAYER_NOT_FOUND = 0xC022_0004,
    FWP_PROVIDER_NOT_FOUND = 0xC022_0005,
    FWP_PROVIDER_CONTEXT_NOT_FOUND = 0xC022_0006,
    FWP_SUBLAYER_NOT_FOUND = 0xC022_0007,
    FWP_NOT_FOUND = 0xC022_0008,
    FWP_ALREADY_EXISTS = 0xC022_0009,
    FWP_IN_USE = 0xC022_000A,
    FWP_DYNAMIC_SESSION_IN_PROGRESS = 0xC022_000B,
    FWP_WRONG_SESSION = 0xC022_000C,
    FWP_NO_TXN_IN_PROGRESS = 0xC022_000D,
    FWP_TXN_IN_PROGRESS = 0xC022_000E,
    FWP_TXN_ABORTED = 0xC022_000F,
    FWP_SESSION_ABORTED = 0xC022_0010,
    FWP_INCOMPATIBLE_TXN = 0xC022_0011,
    FWP_TIMEOUT = 0xC022_0012,
    FWP_NET_EVENTS_DISABLED = 0xC022_0013,
    FWP_INCOMPATIBLE_LAYER = 0xC022_0014,
    FWP_KM_CLIENTS_ONLY = 0xC022_0015,
    FWP_LIFETIME_MISMATCH = 0xC022_0016,
    FWP_BUILTIN_OBJECT = 0xC022_0017,
    FWP_TOO_MANY_CALLOUTS = 0xC022_0018,
    FWP_NOTIFICATION_DROPPED = 0xC022_0019,
    FWP_TRAFFIC_MISMATCH = 0xC022_001A,
    FWP_INCOMPATIBLE_SA_STATE = 0xC022_001B,
    FWP_NULL_POINTER = 0xC022_001C,
    FWP_INVALID_ENUMERATOR = 0xC022_001D,
    FWP_INVALID_FLAGS = 0xC022_001E,
    FWP_INVALID_NET_MASK = 0xC022_001F,
    FWP_INVALID_RANGE = 0xC022_0020,
    FWP_INVALID_INTERVAL = 0xC022_0021,
    FWP_ZERO_LENGTH_ARRAY = 0xC022_0022,
    FWP_NULL_DISPLAY_NAME = 0xC022_0023,
    FWP_INVALID_ACTION_TYPE = 0xC022_0024,
    FWP_INVALID_WEIGHT = 0xC022_0025,
    FWP_MATCH_TYPE_MISMATCH = 0xC022_0026,
    FWP_TYPE_MISMATCH = 0xC022_0027,
    FWP_OUT_OF_BOUNDS = 0xC022_0028,
    FWP_RESERVED = 0xC022_0029,
    FWP_DUPLICATE_CONDITION = 0xC022_002A,
    FWP_DUPLICATE_KEYMOD = 0xC022_002B,
    FWP_ACTION_INCOMPATIBLE_WITH_LAYER = 0xC022_002C,
    FWP_ACTION_INCOMPATIBLE_WITH_SUBLAYER = 0xC022_002D,
    FWP_CONTEXT_INCOMPATIBLE_WITH_LAYER = 0xC022_002E,
    FWP_CONTEXT_INCOMPATIBLE_WITH_CALLOUT = 0xC022_002F,
    FWP_INCOMPATIBLE_AUTH_METHOD = 0xC022_0030,
    FWP_INCOMPATIBLE_DH_GROUP = 0xC022_0031,
    FWP_EM_NOT_SUPPORTED = 0xC022_0032,
    FWP_NEVER_MATCH = 0xC022_0033,
    FWP_PROVIDER_CONTEXT_MISMATCH = 0xC022_0034,
    FWP_INVALID_PARAMETER = 0xC022_0035,
    FWP_TOO_MANY_SUBLAYERS = 0xC022_0036,
    FWP_CALLOUT_NOTIFICATION_FAILED = 0xC022_0037,
    FWP_INVALID_AUTH_TRANSFORM = 0xC022_0038,
    FWP_INVALID_CIPHER_TRANSFORM = 0xC022_0039,
    FWP_INCOMPATIBLE_CIPHER_TRANSFORM = 0xC022_003A,
    FWP_INVALID_TRANSFORM_COMBINATION = 0xC022_003B,
    FWP_DUPLICATE_AUTH_METHOD = 0xC022_003C,
    FWP_INVALID_TUNNEL_ENDPOINT = 0xC022_003D,
    FWP_L2_DRIVER_NOT_READY = 0xC022_003E,
    FWP_KEY_DICTATOR_ALREADY_REGISTERED = 0xC022_003F,
    FWP_KEY_DICTATION_INVALID_KEYING_MATERIAL = 0xC022_0040,
    FWP_CONNECTIONS_DISABLED = 0xC022_0041,
    FWP_INVALID_DNS_NAME = 0xC022_0042,
    FWP_STILL_ON = 0xC022_0043,
    FWP_IKEEXT_NOT_RUNNING = 0xC022_0044,
    FWP_TCPIP_NOT_READY = 0xC022_0100,
    FWP_INJECT_HANDLE_CLOSING = 0xC022_0101,
    FWP_INJECT_HANDLE_STALE = 0xC022_0102,
    FWP_CANNOT_PEND = 0xC022_0103,
    FWP_DROP_NOICMP = 0xC022_0104,

    // Error, facility 0x023
    NDIS_CLOSING = 0xC023_0002,
    NDIS_BAD_VERSION = 0xC023_0004,
    NDIS_BAD_CHARACTERISTICS = 0xC023_0005,
    NDIS_ADAPTER_NOT_FOUND = 0xC023_0006,
    NDIS_OPEN_FAILED = 0xC023_0007,
    NDIS_DEVICE_FAILED = 0xC023_0008,
    NDIS_MULTICAST_FULL = 0xC023_0009,
    NDIS_MULTICAST_EXISTS = 0xC023_000A,
    NDIS_MULTICAST_NOT_FOUND = 0xC023_000B,
    NDIS_REQUEST_ABORTED = 0xC023_000C,
    NDIS_RESET_IN_PROGRESS = 0xC023_000D,
    NDIS_INVALID_PACKET = 0xC023_000F,
    NDIS_INVALID_DEVICE_REQUEST = 0xC023_0010,
    NDIS_ADAPTER_NOT_READY = 0xC023_0011,
    NDIS_INVALID_LENGTH = 0xC023_0014,
    NDIS_INVALID_DATA = 0xC023_0015,
    NDIS_BUFFER_TOO_SHORT = 0xC023_0016,
    NDIS_INVALID_OID = 0xC023_0017,
    NDIS_ADAPTER_REMOVED = 0xC023_0018,
    NDIS_UNSUPPORTED_MEDIA = 0xC023_0019,
    NDIS_GROUP_ADDRESS_IN_USE = 0xC023_001A,
    NDIS_FILE_NOT_FOUND = 0xC023_001B,
    NDIS_ERROR_READING_FILE = 0xC023_001C,
    NDIS_ALREADY_MAPPED = 0xC023_001D,
    NDIS_RESOURCE_CONFLICT = 0xC023_001E,
    NDIS_MEDIA_DISCONNECTED = 0xC023_001F,
    NDIS_INVALID_ADDRESS = 0xC023_0022,
    NDIS_PAUSED = 0xC023_002A,
    NDIS_INTERFACE_NOT_FOUND = 0xC023_002B,
    NDIS_UNSUPPORTED_REVISION = 0xC023_002C,
    NDIS_INVALID_PORT = 0xC023_002D,
    NDIS_INVALID_PORT_STATE = 0xC023_002E,
    NDIS_LOW_POWER_STATE = 0xC023_002F,
    NDIS_REINIT_REQUIRED = 0xC023_0030,
    NDIS_NO_QUEUES = 0xC023_0031,
    NDIS_NOT_SUPPORTED = 0xC023_00BB,
    NDIS_OFFLOAD_POLICY = 0xC023_100F,
    NDIS_OFFLOAD_CONNECTION_REJECTED = 0xC023_1012,
    NDIS_OFFLOAD_PATH_REJECTED = 0xC023_1013,
    NDIS_DOT11_AUTO_CONFIG_ENABLED = 0xC023_2000,
    NDIS_DOT11_MEDIA_IN_USE = 0xC023_2001,
    NDIS_DOT11_POWER_STATE_INVALID = 0xC023_2002,
    NDIS_PM_WOL_PATTERN_LIST_FULL = 0xC023_2003,
    NDIS_PM_PROTOCOL_OFFLOAD_LIST_FULL = 0xC023_2004,
    NDIS_DOT11_AP_CHANNEL_CURRENTLY_NOT_AVAILABLE = 0xC023_2005,
    NDIS_DOT11_AP_BAND_CURRENTLY_NOT_AVAILABLE = 0xC023_2006,
    NDIS_DOT11_AP_CHANNEL_NOT_ALLOWED = 0xC023_2007,
    NDIS_DOT11_AP_BAND_NOT_ALLOWED = 0xC023_2008,

    // Error, facility 0x024
    QUIC_HANDSHAKE_FAILURE = 0xC024_0000,
    QUIC_VER_NEG_FAILURE = 0xC024_0001,
    QUIC_USER_CANCELED = 0xC024_0002,
    QUIC_INTERNAL_ERROR = 0xC024_0003,
    QUIC_PROTOCOL_VIOLATION = 0xC024_0004,
    QUIC_CONNECTION_IDLE = 0xC024_0005,
    QUIC_CONNECTION_TIMEOUT = 0xC024_0006,
    QUIC_ALPN_NEG_FAILURE = 0xC024_0007,

    // Error, facility 0x029
    TPM_ERROR_MASK = 0xC029_0000,
    TPM_AUTHFAIL = 0xC029_0001,
    TPM_BADINDEX = 0xC029_0002,
    TPM_BAD_PARAMETER = 0xC029_0003,
    TPM_AUDITFAILURE = 0xC029_0004,
    TPM_CLEAR_DISABLED = 0xC029_0005,
    TPM_DEACTIVATED = 0xC029_0006,
    TPM_DISABLED = 0xC029_0007,
    TPM_DISABLED_CMD = 0xC029_0008,
    TPM_FAIL = 0xC029_0009,
    TPM_BAD_ORDINAL = 0xC029_000A,
    TPM_INSTALL_DISABLED = 0xC029_000B,
    TPM_INVALID_KEYHANDLE = 0xC029_000C,
    TPM_KEYNOTFOUND = 0xC029_000D,
    TPM_INAPPROPRIATE_ENC = 0xC029_000E,
    TPM_MIGRATEFAIL = 0xC029_000F,
    TPM_INVALID_PCR_INFO = 0xC029_0010,
    TPM_NOSPACE = 0xC029_0011,
    TPM_NOSRK = 0xC029_0012,
    TPM_NOTSEALED_BLOB = 0xC029_0013,
    TPM_OWNER_SET = 0xC029_0014,
    TPM_RESOURCES = 0xC029_0015,
    TPM_SHORTRANDOM = 0xC029_0016,
    TPM_SIZE = 0xC029_0017,
    TPM_WRONGPCRVAL = 0xC029_0018,
    TPM_BAD_PARAM_SIZE = 0xC029_0019,
    TPM_SHA_THREAD = 0xC029_001A,
    TPM_SHA_ERROR = 0xC029_001B,
    TPM_FAILEDSELFTEST = 0xC029_001C,
    TPM_AUTH2FAIL = 0xC029_001D,
    TPM_BADTAG = 0xC029_001E,
    TPM_IOERROR = 0xC029_001F,
    TPM_ENCRYPT_ERROR = 0xC029_0020,
    TPM_DECRYPT_ERROR = 0xC029_0021,
    TPM_INVALID_AUTHHANDLE = 0xC029_0022,
    TPM_NO_ENDORSEMENT = 0xC029_0023,
    TPM_INVALID_KEYUSAGE = 0xC029_0024,
    TPM_WRONG_ENTITYTYPE = 0xC029_0025,
    TPM_INVALID_POSTINIT = 0xC029_0026,
    TPM_INAPPROPRIATE_SIG = 0xC029_0027,
    TPM_BAD_KEY_PROPERTY = 0xC029_0028,
    TPM_BAD_MIGRATION = 0xC029_0029,
    TPM_BAD_SCHEME = 0xC029_002A,
    TPM_BAD_DATASIZE = 0xC029_002B,
    TPM_BAD_MODE = 0xC029_002C,
    TPM_BAD_PRESENCE = 0xC029_002D,
    TPM_BAD_VERSION = 0xC029_002E,
    TPM_NO_WRAP_TRANSPORT = 0xC029_002F,
    TPM_AUDITFAIL_UNSUCCESSFUL = 0xC029_0030,
    TPM_AUDITFAIL_SUCCESSFUL = 0xC029_0031,
    TPM_NOTRESETABLE = 0xC029_0032,
    TPM_NOTLOCAL = 0xC029_0033,
    TPM_BAD_TYPE = 0xC029_0034,
    TPM_INVALID_RESOURCE = 0xC029_0035,
    TPM_NOTFIPS = 0xC029_0036,
    TPM_INVALID_FAMILY = 0xC029_0037,
    TPM_NO_NV_PERMISSION = 0xC029_0038,
    TPM_REQUIRES_SIGN = 0xC029_0039,
    TPM_KEY_NOTSUPPORTED = 0xC029_003A,
    TPM_AUTH_CONFLICT = 0xC029_003B,
    TPM_AREA_LOCKED = 0xC029_003C,
    TPM_BAD_LOCALITY = 0xC029_003D,
    TPM_READ_ONLY = 0xC029_003E,
    TPM_PER_NOWRITE = 0xC029_003F,
    TPM_FAMILYCOUNT = 0xC029_0040,
    TPM_WRITE_LOCKED = 0xC029_0041,
    TPM_BAD_ATTRIBUTES = 0xC029_0042,
    TPM_INVALID_STRUCTURE = 0xC029_0043,
    TPM_KEY_OWNER_CONTROL = 0xC029_0044,
    TPM_BAD_COUNTER = 0xC029_0045,
    TPM_NOT_FULLWRITE = 0xC029_0046,
    TPM_CONTEXT_GAP = 0xC029_0047,
    TPM_MAXNVWRITES = 0xC029_0048,
    TPM_NOOPERATOR = 0xC029_0049,
    TPM_RESOURCEMISSING = 0xC029_004A,
    TPM_DELEGATE_LOCK = 0xC029_004B,
    TPM_DELEGATE_FAMILY = 0xC029_004C,
    TPM_DELEGATE_ADMIN = 0xC029_004D,
    TPM_TRANSPORT_NOTEXCLUSIVE = 0xC029_004E,
    TPM_OWNER_CONTROL = 0xC029_004F,
    TPM_DAA_RESOURCES = 0xC029_0050,
    TPM_DAA_INPUT_DATA0 = 0xC029_0051,
    TPM_DAA_INPUT_DATA1 = 0xC029_0052,
    TPM_DAA_ISSUER_SETTINGS = 0xC029_0053,
    TPM_DAA_TPM_SETTINGS = 0xC029_0054,
    TPM_DAA_STAGE = 0xC029_0055,
    TPM_DAA_ISSUER_VALIDITY = 0xC029_0056,
    TPM_DAA_WRONG_W = 0xC029_0057,
    TPM_BAD_HANDLE = 0xC029_0058,
    TPM_BAD_DELEGATE = 0xC029_0059,
    TPM_BADCONTEXT = 0xC029_005A,
    TPM_TOOMANYCONTEXTS = 0xC029_005B,
    TPM_MA_TICKET_SIGNATURE = 0xC029_005C,
    TPM_MA_DESTINATION = 0xC029_005D,
    TPM_MA_SOURCE = 0xC029_005E,
    TPM_MA_AUTHORITY = 0xC029_005F,
    TPM_PERMANENTEK = 0xC029_0061,
    TPM_BAD_SIGNATURE = 0xC029_0062,
    TPM_NOCONTEXTSPACE = 0xC029_0063,
    TPM_20_E_ASYMMETRIC = 0xC029_0081,
    TPM_20_E_ATTRIBUTES = 0xC029_0082,
    TPM_20_E_HASH = 0xC029_0083,
    TPM_20_E_VALUE = 0xC029_0084,
    TPM_20_E_HIERARCHY = 0xC029_0085,
    TPM_20_E_KEY_SIZE = 0xC029_0087,
    TPM_20_E_MGF = 0xC029_0088,
    TPM_20_E_MODE = 0xC029_0089,
    TPM_20_E_TYPE = 0xC029_008A,
    TPM_20_E_HANDLE = 0xC029_008B,
    TPM_20_E_KDF = 0xC029_008C,
    TPM_20_E_RANGE = 0xC029_008D,
    TPM_20_E_AUTH_FAIL = 0xC029_008E,
    TPM_20_E_NONCE = 0xC029_008F,
    TPM_20_E_PP = 0xC029_0090,
    TPM_20_E_SCHEME = 0xC029_0092,
    TPM_20_E_SIZE = 0xC029_0095,
    TPM_20_E_SYMMETRIC = 0xC029_0096,
    TPM_20_E_TAG = 0xC029_0097,
    TPM_20_E_SELECTOR = 0xC029_0098,
    TPM_20_E_INSUFFICIENT = 0xC029_009A,
    TPM_20_E_SIGNATURE = 0xC029_009B,
    TPM_20_E_KEY = 0xC029_009C,
    TPM_20_E_POLICY_FAIL = 0xC029_009D,
    TPM_20_E_INTEGRITY = 0xC029_009F,
    TPM_20_E_TICKET = 0xC029_00A0,
    TPM_20_E_RESERVED_BITS = 0xC029_00A1,
    TPM_20_E_BAD_AUTH = 0xC029_00A2,
    TPM_20_E_EXPIRED = 0xC029_00A3,
    TPM_20_E_POLICY_CC = 0xC029_00A4,
    TPM_20_E_BINDING = 0xC029_00A5,
    TPM_20_E_CURVE = 0xC029_00A6,
    TPM_20_E_ECC_POINT = 0xC029_00A7,
    TPM_20_E_INITIALIZE = 0xC029_0100,
    TPM_20_E_FAILURE = 0xC029_0101,
    TPM_20_E_SEQUENCE = 0xC029_0103,
    TPM_20_E_PRIVATE = 0xC029_010B,
    TPM_20_E_HMAC = 0xC029_0119,
    TPM_20_E_DISABLED = 0xC029_0120,
    TPM_20_E_EXCLUSIVE = 0xC029_0121,
    TPM_20_E_ECC_CURVE = 0xC029_0123,
    TPM_20_E_AUTH_TYPE = 0xC029_0124,
    TPM_20_E_AUTH_MISSING = 0xC029_0125,
    TPM_20_E_POLICY = 0xC029_0126,
    TPM_20_E_PCR = 0xC029_0127,
    TPM_20_E_PCR_CHANGED = 0xC029_0128,
    TPM_20_E_UPGRADE = 0xC029_012D,
    TPM_20_E_TOO_MANY_CONTEXTS = 0xC029_012E,
    TPM_20_E_AUTH_UNAVAILABLE = 0xC029_012F,
    TPM_20_E_REBOOT = 0xC029_0130,
    TPM_20_E_UNBALANCED = 0xC029_0131,
    TPM_20_E_COMMAND_SIZE = 0xC029_0142,
    TPM_20_E_COMMAND_CODE = 0xC029_0143,
    TPM_20_E_AUTHSIZE = 0xC029_0144,
    TPM_20_E_AUTH_CONTEXT = 0xC029_0145,
    TPM_20_E_NV_RANGE = 0xC029_0146,
    TPM_20_E_NV_SIZE = 0xC029_0147,
    TPM_20_E_NV_LOCKED = 0xC029_0148,
    TPM_20_E_NV_AUTHORIZATION = 0xC029_0149,
    TPM_20_E_NV_UNINITIALIZED = 0xC029_014A,
    TPM_20_E_NV_SPACE = 0xC029_014B,
    TPM_20_E_NV_DEFINED = 0xC029_014C,
    TPM_20_E_BAD_CONTEXT = 0xC029_0150,
    TPM_20_E_CPHASH = 0xC029_0151,
    TPM_20_E_PARENT = 0xC029_0152,
    TPM_20_E_NEEDS_TEST = 0xC029_0153,
    TPM_20_E_NO_RESULT = 0xC029_0154,
    TPM_20_E_SENSITIVE = 0xC029_0155,
    TPM_COMMAND_BLOCKED = 0xC029_0400,
    TPM_INVALID_HANDLE = 0xC029_0401,
    TPM_DUPLICATE_VHANDLE = 0xC029_0402,
    TPM_EMBEDDED_COMMAND_BLOCKED = 0xC029_0403,
    TPM_EMBEDDED_COMMAND_UNSUPPORTED = 0xC029_0404,
    TPM_RETRY = 0xC029_0800,
    TPM_NEEDS_SELFTEST = 0xC029_0801,
    TPM_DOING_SELFTEST = 0xC029_0802,
    TPM_DEFEND_LOCK_RUNNING = 0xC029_0803,
    TPM_COMMAND_CANCELED = 0xC029_1001,
    TPM_TOO_MANY_CONTEXTS = 0xC029_1002,
    TPM_NOT_FOUND = 0xC029_1003,
    TPM_ACCESS_DENIED = 0xC029_1004,
    TPM_INSUFFICIENT_BUFFER = 0xC029_1005,
    TPM_PPI_FUNCTION_UNSUPPORTED = 0xC029_1006,
    PCP_ERROR_MASK = 0xC029_2000,
    PCP_DEVICE_NOT_READY = 0xC029_2001,
    PCP_INVALID_HANDLE = 0xC029_2002,
    PCP_INVALID_PARAMETER = 0xC029_2003,
    PCP_FLAG_NOT_SUPPORTED = 0xC029_2004,
    PCP_NOT_SUPPORTED = 0xC029_2005,
    PCP_BUFFER_TOO_SMALL = 0xC029_2006,
    PCP_INTERNAL_ERROR = 0xC029_2007,
    PCP_AUTHENTICATION_FAILED = 0xC029_2008,
    PCP_AUTHENTICATION_IGNORED = 0xC029_2009,
    PCP_POLICY_NOT_FOUND = 0xC029_200A,
    PCP_PROFILE_NOT_FOUND = 0xC029_200B,
    PCP_VALIDATION_FAILED = 0xC029_200C,
    PCP_DEVICE_NOT_FOUND = 0xC029_200D,
    PCP_WRONG_PARENT = 0xC029_200E,
    PCP_KEY_NOT_LOADED = 0xC029_200F,
    PCP_NO_KEY_CERTIFICATION = 0xC029_2010,
    PCP_KEY_NOT_FINALIZED = 0xC029_2011,
    PCP_ATTESTATION_CHALLENGE_NOT_SET = 0xC029_2012,
    PCP_NOT_PCR_BOUND = 0xC029_2013,
    PCP_KEY_ALREADY_FINALIZED = 0xC029_2014,
    PCP_KEY_USAGE_POLICY_NOT_SUPPORTED = 0xC029_2015,
    PCP_KEY_USAGE_POLICY_INVALID = 0xC029_2016,
    PCP_SOFT_KEY_ERROR = 0xC029_2017,
    PCP_KEY_NOT_AUTHENTICATED = 0xC029_2018,
    PCP_KEY_NOT_AIK = 0xC029_2019,
    PCP_KEY_NOT_SIGNING_KEY = 0xC029_201A,
    PCP_LOCKED_OUT = 0xC029_201B,
    PCP_CLAIM_TYPE_NOT_SUPPORTED = 0xC029_201C,
    PCP_TPM_VERSION_NOT_SUPPORTED = 0xC029_201D,
    PCP_BUFFER_LENGTH_MISMATCH = 0xC029_201E,
    PCP_IFX_RSA_KEY_CREATION_BLOCKED = 0xC029_201F,
    PCP_TICKET_MISSING = 0xC029_2020,
    PCP_RAW_POLICY_NOT_SUPPORTED = 0xC029_2021,
    PCP_KEY_HANDLE_INVALIDATED = 0xC029_2022,
    RTPM_NO_RESULT = 0xC029_3002,
    RTPM_PCR_READ_INCOMPLETE = 0xC029_3003,
    RTPM_INVALID_CONTEXT = 0xC029_3004,
    RTPM_UNSUPPORTED_CMD = 0xC029_3005,
    TPM_ZERO_EXHAUST_ENABLED = 0xC029_4000,

    // Error, facility 0x035
    HV_INVALID_HYPERCALL_CODE = 0xC035_0002,
    HV_INVALID_HYPERCALL_INPUT = 0xC035_0003,
    HV_INVALID_ALIGNMENT = 0xC035_0004,
    HV_INVALID_PARAMETER = 0xC035_0005,
    HV_ACCESS_DENIED = 0xC035_0006,
    HV_INVALID_PARTITION_STATE = 0xC035_0007,
    HV_OPERATION_DENIED = 0xC035_0008,
    HV_UNKNOWN_PROPERTY = 0xC035_0009,
    HV_PROPERTY_VALUE_OUT_OF_RANGE = 0xC035_000A,
    HV_INSUFFICIENT_MEMORY = 0xC035_000B,
    HV_PARTITION_TOO_DEEP = 0xC035_000C,
    HV_INVALID_PARTITION_ID = 0xC035_000D,
    HV_INVALID_VP_INDEX = 0xC035_000E,
    HV_INVALID_PORT_ID = 0xC035_0011,
    HV_INVALID_CONNECTION_ID = 0xC035_0012,
    HV_INSUFFICIENT_BUFFERS = 0xC035_0013,
    HV_NOT_ACKNOWLEDGED = 0xC035_0014,
    HV_INVALID_VP_STATE = 0xC035_0015,
    HV_ACKNOWLEDGED = 0xC035_0016,
    HV_INVALID_SAVE_RESTORE_STATE = 0xC035_0017,
    HV_INVALID_SYNIC_STATE = 0xC035_0018,
    HV_OBJECT_IN_USE = 0xC035_0019,
    HV_INVALID_PROXIMITY_DOMAIN_INFO = 0xC035_001A,
    HV_NO_DATA = 0xC035_001B,
    HV_INACTIVE = 0xC035_001C,
    HV_NO_RESOURCES = 0xC035_001D,
    HV_FEATURE_UNAVAILABLE = 0xC035_001E,
    HV_INSUFFICIENT_BUFFER = 0xC035_0033,
    HV_INSUFFICIENT_DEVICE_DOMAINS = 0xC035_0038,
    HV_CPUID_FEATURE_VALIDATION_ERROR = 0xC035_003C,
    HV_CPUID_XSAVE_FEATURE_VALIDATION_ERROR = 0xC035_003D,
    HV_PROCESSOR_STARTUP_TIMEOUT = 0xC035_003E,
    HV_SMX_ENABLED = 0xC035_003F,
    HV_INVALID_LP_INDEX = 0xC035_0041,
    HV_INVALID_REGISTER_VALUE = 0xC035_0050,
    HV_INVALID_VTL_STATE = 0xC035_0051,
    HV_NX_NOT_DETECTED = 0xC035_0055,
    HV_INVALID_DEVICE_ID = 0xC035_0057,
    HV_INVALID_DEVICE_STATE = 0xC035_0058,
    HV_PAGE_REQUEST_INVALID = 0xC035_0060,
    HV_INVALID_CPU_GROUP_ID = 0xC035_006F,
    HV_INVALID_CPU_GROUP_STATE = 0xC035_0070,
    HV_OPERATION_FAILED = 0xC035_0071,
    HV_NOT_ALLOWED_WITH_NESTED_VIRT_ACTIVE = 0xC035_0072,
    HV_INSUFFICIENT_ROOT_MEMORY = 0xC035_0073,
    HV_EVENT_BUFFER_ALREADY_FREED = 0xC035_0074,
    HV_INSUFFICIENT_CONTIGUOUS_MEMORY = 0xC035_0075,
    HV_DEVICE_NOT_IN_DOMAIN = 0xC035_0076,
    HV_NESTED_VM_EXIT = 0xC035_0077,
    HV_CALL_PENDING = 0xC035_0079,
    HV_MSR_ACCESS_FAILED = 0xC035_0080,
    HV_INSUFFICIENT_MEMORY_MIRRORING = 0xC035_0081,
    HV_INSUFFICIENT_CONTIGUOUS_MEMORY_MIRRORING = 0xC035_0082,
    HV_INSUFFICIENT_CONTIGUOUS_ROOT_MEMORY = 0xC035_0083,
    HV_INSUFFICIENT_ROOT_MEMORY_MIRRORING = 0xC035_0084,
    HV_INSUFFICIENT_CONTIGUOUS_ROOT_MEMORY_MIRRORING = 0xC035_0085,
    HV_NOT_PRESENT = 0xC035_1000,

    // Error, facility 0x036
    IPSEC_BAD_SPI = 0xC036_0001,
    IPSEC_SA_LIFETIME_EXPIRED = 0xC036_0002,
    IPSEC_WRONG_SA = 0xC036_0003,
    IPSEC_REPLAY_CHECK_FAILED = 0xC036_0004,
    IPSEC_INVALID_PACKET = 0xC036_0005,
    IPSEC_INTEGRITY_CHECK_FAILED = 0xC036_0006,
    IPSEC_CLEAR_TEXT_DROP = 0xC036_0007,
    IPSEC_AUTH_FIREWALL_DROP = 0xC036_0008,
    IPSEC_THROTTLE_DROP = 0xC036_0009,
    IPSEC_DOSP_BLOCK = 0xC036_8000,
    IPSEC_DOSP_RECEIVED_MULTICAST = 0xC036_8001,
    IPSEC_DOSP_INVALID_PACKET = 0xC036_8002,
    IPSEC_DOSP_STATE_LOOKUP_FAILED = 0xC036_8003,
    IPSEC_DOSP_MAX_ENTRIES = 0xC036_8004,
    IPSEC_DOSP_KEYMOD_NOT_ALLOWED = 0xC036_8005,
    IPSEC_DOSP_MAX_PER_IP_RATELIMIT_QUEUES = 0xC036_8006,

    // Error, facility 0x037
    VID_DUPLICATE_HANDLER = 0xC037_0001,
    VID_TOO_MANY_HANDLERS = 0xC037_0002,
    VID_QUEUE_FULL = 0xC037_0003,
    VID_HANDLER_NOT_PRESENT = 0xC037_0004,
    VID_INVALID_OBJECT_NAME = 0xC037_0005,
    VID_PARTITION_NAME_TOO_LONG = 0xC037_0006,
    VID_MESSAGE_QUEUE_NAME_TOO_LONG = 0xC037_0007,
    VID_PARTITION_ALREADY_EXISTS = 0xC037_0008,
    VID_PARTITION_DOES_NOT_EXIST = 0xC037_0009,
    VID_PARTITION_NAME_NOT_FOUND = 0xC037_000A,
    VID_MESSAGE_QUEUE_ALREADY_EXISTS = 0xC037_000B,
    VID_EXCEEDED_MBP_ENTRY_MAP_LIMIT = 0xC037_000C,
    VID_MB_STILL_REFERENCED = 0xC037_000D,
    VID_CHILD_GPA_PAGE_SET_CORRUPTED = 0xC037_000E,
    VID_INVALID_NUMA_SETTINGS = 0xC037_000F,
    VID_INVALID_NUMA_NODE_INDEX = 0xC037_0010,
    VID_NOTIFICATION_QUEUE_ALREADY_ASSOCIATED = 0xC037_0011,
    VID_INVALID_MEMORY_BLOCK_HANDLE = 0xC037_0012,
    VID_PAGE_RANGE_OVERFLOW = 0xC037_0013,
    VID_INVALID_MESSAGE_QUEUE_HANDLE = 0xC037_0014,
    VID_INVALID_GPA_RANGE_HANDLE = 0xC037_0015,
    VID_NO_MEMORY_BLOCK_NOTIFICATION_QUEUE = 0xC037_0016,
    VID_MEMORY_BLOCK_LOCK_COUNT_EXCEEDED = 0xC037_0017,
    VID_INVALID_PPM_HANDLE = 0xC037_0018,
    VID_MBPS_ARE_LOCKED = 0xC037_0019,
    VID_MESSAGE_QUEUE_CLOSED = 0xC037_001A,
    VID_VIRTUAL_PROCESSOR_LIMIT_EXCEEDED = 0xC037_001B,
    VID_STOP_PENDING = 0xC037_001C,
    VID_INVALID_PROCESSOR_STATE = 0xC037_001D,
    VID_EXCEEDED_KM_CONTEXT_COUNT_LIMIT = 0xC037_001E,
    VID_KM_INTERFACE_ALREADY_INITIALIZED = 0xC037_001F,
    VID_MB_PROPERTY_ALREADY_SET_RESET = 0xC037_0020,
    VID_MMIO_RANGE_DESTROYED = 0xC037_0021,
    VID_INVALID_CHILD_GPA_PAGE_SET = 0xC037_0022,
    VID_RESERVE_PAGE_SET_IS_BEING_USED = 0xC037_0023,
    VID_RESERVE_PAGE_SET_TOO_SMALL = 0xC037_0024,
    VID_MBP_ALREADY_LOCKED_USING_RESERVED_PAGE = 0xC037_0025,
    VID_MBP_COUNT_EXCEEDED_LIMIT = 0xC037_0026,
    VID_SAVED_STATE_CORRUPT = 0xC037_0027,
    VID_SAVED_STATE_UNRECOGNIZED_ITEM = 0xC037_0028,
    VID_SAVED_STATE_INCOMPATIBLE = 0xC037_0029,
    VID_VTL_ACCESS_DENIED = 0xC037_002A,
    VID_INSUFFICIENT_RESOURCES_RESERVE = 0xC037_002B,
    VID_INSUFFICIENT_RESOURCES_PHYSICAL_BUFFER = 0xC037_002C,
    VID_INSUFFICIENT_RESOURCES_HV_DEPOSIT = 0xC037_002D,
    VID_MEMORY_TYPE_NOT_SUPPORTED = 0xC037_002E,
    VID_INSUFFICIENT_RESOURCES_WITHDRAW = 0xC037_002F,
    VID_PROCESS_ALREADY_SET = 0xC037_0030,
    DM_OPERATION_LIMIT_EXCEEDED = 0xC037_0600,

    // Error, facility 0x038
    VOLMGR_DATABASE_FULL = 0xC038_0001,
    VOLMGR_DISK_CONFIGURATION_CORRUPTED = 0xC038_0002,
    VOLMGR_DISK_CONFIGURATION_NOT_IN_SYNC = 0xC038_0003,
    VOLMGR_PACK_CONFIG_UPDATE_FAILED = 0xC038_0004,
    VOLMGR_DISK_CONTAINS_NON_SIMPLE_VOLUME = 0xC038_0005,
    VOLMGR_DISK_DUPLICATE = 0xC038_0006,
    VOLMGR_DISK_DYNAMIC = 0xC038_0007,
    VOLMGR_DISK_ID_INVALID = 0xC038_0008,
    VOLMGR_DISK_INVALID = 0xC038_0009,
    VOLMGR_DISK_LAST_VOTER = 0xC038_000A,
    VOLMGR_DISK_LAYOUT_INVALID = 0xC038_000B,
    VOLMGR_DISK_LAYOUT_NON_BASIC_BETWEEN_BASIC_PARTITIONS = 0xC038_000C,
    VOLMGR_DISK_LAYOUT_NOT_CYLINDER_ALIGNED = 0xC038_000D,
    VOLMGR_DISK_LAYOUT_PARTITIONS_TOO_SMALL = 0xC038_000E,
    VOLMGR_DISK_LAYOUT_PRIMARY_BETWEEN_LOGICAL_PARTITIONS = 0xC038_000F,
    VOLMGR_DISK_LAYOUT_TOO_MANY_PARTITIONS = 0xC038_0010,
    VOLMGR_DISK_MISSING = 0xC038_0011,
    VOLMGR_DISK_NOT_EMPTY = 0xC038_0012,
    VOLMGR_DISK_NOT_ENOUGH_SPACE = 0xC038_0013,
    VOLMGR_DISK_REVECTORING_FAILED = 0xC038_0014,
    VOLMGR_DISK_SECTOR_SIZE_INVALID = 0xC038_0015,
    VOLMGR_DISK_SET_NOT_CONTAINED = 0xC038_0016,
    VOLMGR_DISK_USED_BY_MULTIPLE_MEMBERS = 0xC038_0017,
    VOLMGR_DISK_USED_BY_MULTIPLE_PLEXES = 0xC038_0018,
    VOLMGR_DYNAMIC_DISK_NOT_SUPPORTED = 0xC038_0019,
    VOLMGR_EXTENT_ALREADY_USED = 0xC038_001A,
    VOLMGR_EXTENT_NOT_CONTIGUOUS = 0xC038_001B,
    VOLMGR_EXTENT_NOT_IN_PUBLIC_REGION = 0xC038_001C,
    VOLMGR_EXTENT_NOT_SECTOR_ALIGNED = 0xC038_001D,
    VOLMGR_EXTENT_OVERLAPS_EBR_PARTITION = 0xC038_001E,
    VOLMGR_EXTENT_VOLUME_LENGTHS_DO_NOT_MATCH = 0xC038_001F,
    VOLMGR_FAULT_TOLERANT_NOT_SUPPORTED = 0xC038_0020,
    VOLMGR_INTERLEAVE_LENGTH_INVALID = 0xC038_0021,
    VOLMGR_MAXIMUM_REGISTERED_USERS = 0xC038_0022,
    VOLMGR_MEMBER_IN_SYNC = 0xC038_0023,
    VOLMGR_MEMBER_INDEX_DUPLICATE = 0xC038_0024,
    VOLMGR_MEMBER_INDEX_INVALID = 0xC038_0025,
    VOLMGR_MEMBER_MISSING = 0xC038_0026,
    VOLMGR_MEMBER_NOT_DETACHED = 0xC038_0027,
    VOLMGR_MEMBER_REGENERATING = 0xC038_0028,
    VOLMGR_ALL_DISKS_FAILED = 0xC038_0029,
    VOLMGR_NO_REGISTERED_USERS = 0xC038_002A,
    VOLMGR_NO_SUCH_USER = 0xC038_002B,
    VOLMGR_NOTIFICATION_RESET = 0xC038_002C,
    VOLMGR_NUMBER_OF_MEMBERS_INVALID = 0xC038_002D,
    VOLMGR_NUMBER_OF_PLEXES_INVALID = 0xC038_002E,
    VOLMGR_PACK_DUPLICATE = 0xC038_002F,
    VOLMGR_PACK_ID_INVALID = 0xC038_0030,
    VOLMGR_PACK_INVALID = 0xC038_0031,
    VOLMGR_PACK_NAME_INVALID = 0xC038_0032,
    VOLMGR_PACK_OFFLINE = 0xC038_0033,
    VOLMGR_PACK_HAS_QUORUM = 0xC038_0034,
    VOLMGR_PACK_WITHOUT_QUORUM = 0xC038_0035,
    VOLMGR_PARTITION_STYLE_INVALID = 0xC038_0036,
    VOLMGR_PARTITION_UPDATE_FAILED = 0xC038_0037,
    VOLMGR_PLEX_IN_SYNC = 0xC038_0038,
    VOLMGR_PLEX_INDEX_DUPLICATE = 0xC038_0039,
    VOLMGR_PLEX_INDEX_INVALID = 0xC038_003A,
    VOLMGR_PLEX_LAST_ACTIVE = 0xC038_003B,
    VOLMGR_PLEX_MISSING = 0xC038_003C,
    VOLMGR_PLEX_REGENERATING = 0xC038_003D,
    VOLMGR_PLEX_TYPE_INVALID = 0xC038_003E,
    VOLMGR_PLEX_NOT_RAID5 = 0xC038_003F,
    VOLMGR_PLEX_NOT_SIMPLE = 0xC038_0040,
    VOLMGR_STRUCTURE_SIZE_INVALID = 0xC038_0041,
    VOLMGR_TOO_MANY_NOTIFICATION_REQUESTS = 0xC038_0042,
    VOLMGR_TRANSACTION_IN_PROGRESS = 0xC038_0043,
    VOLMGR_UNEXPECTED_DISK_LAYOUT_CHANGE = 0xC038_0044,
    VOLMGR_VOLUME_CONTAINS_MISSING_DISK = 0xC038_0045,
    VOLMGR_VOLUME_ID_INVALID = 0xC038_0046,
    VOLMGR_VOLUME_LENGTH_INVALID = 0xC038_0047,
    VOLMGR_VOLUME_LENGTH_NOT_SECTOR_SIZE_MULTIPLE = 0xC038_0048,
    VOLMGR_VOLUME_NOT_MIRRORED = 0xC038_0049,
    VOLMGR_VOLUME_NOT_RETAINED = 0xC038_004A,
    VOLMGR_VOLUME_OFFLINE = 0xC038_004B,
    VOLMGR_VOLUME_RETAINED = 0xC038_004C,
    VOLMGR_NUMBER_OF_EXTENTS_INVALID = 0xC038_004D,
    VOLMGR_DIFFERENT_SECTOR_SIZE = 0xC038_004E,
    VOLMGR_BAD_BOOT_DISK = 0xC038_004F,
    VOLMGR_PACK_CONFIG_OFFLINE = 0xC038_0050,
    VOLMGR_PACK_CONFIG_ONLINE = 0xC038_0051,
    VOLMGR_NOT_PRIMARY_PACK = 0xC038_0052,
    VOLMGR_PACK_LOG_UPDATE_FAILED = 0xC038_0053,
    VOLMGR_NUMBER_OF_DISKS_IN_PLEX_INVALID = 0xC038_0054,
    VOLMGR_NUMBER_OF_DISKS_IN_MEMBER_INVALID = 0xC038_0055,
    VOLMGR_VOLUME_MIRRORED = 0xC038_0056,
    VOLMGR_PLEX_NOT_SIMPLE_SPANNED = 0xC038_0057,
    VOLMGR_NO_VALID_LOG_COPIES = 0xC038_0058,
    VOLMGR_PRIMARY_PACK_PRESENT = 0xC038_0059,
    VOLMGR_NUMBER_OF_DISKS_INVALID = 0xC038_005A,
    VOLMGR_MIRROR_NOT_SUPPORTED = 0xC038_005B,
    VOLMGR_RAID5_NOT_SUPPORTED = 0xC038_005C,

    // Error, facility 0x039
    BCD_TOO_MANY_ELEMENTS = 0xC039_0002,

    // Error, facility 0x03A
    VHD_DRIVE_FOOTER_MISSING = 0xC03A_0001,
    VHD_DRIVE_FOOTER_CHECKSUM_MISMATCH = 0xC03A_0002,
    VHD_DRIVE_FOOTER_CORRUPT = 0xC03A_0003,
    VHD_FORMAT_UNKNOWN = 0xC03A_0004,
    VHD_FORMAT_UNSUPPORTED_VERSION = 0xC03A_0005,
    VHD_SPARSE_HEADER_CHECKSUM_MISMATCH = 0xC03A_0006,
    VHD_SPARSE_HEADER_UNSUPPORTED_VERSION = 0xC03A_0007,
    VHD_SPARSE_HEADER_CORRUPT = 0xC03A_0008,
    VHD_BLOCK_ALLOCATION_FAILURE = 0xC03A_0009,
    VHD_BLOCK_ALLOCATION_TABLE_CORRUPT = 0xC03A_000A,
    VHD_INVALID_BLOCK_SIZE = 0xC03A_000B,
    VHD_BITMAP_MISMATCH = 0xC03A_000C,
    VHD_PARENT_VHD_NOT_FOUND = 0xC03A_000D,
    VHD_CHILD_PARENT_ID_MISMATCH = 0xC03A_000E,
    VHD_CHILD_PARENT_TIMESTAMP_MISMATCH = 0xC03A_000F,
    VHD_METADATA_READ_FAILURE = 0xC03A_0010,
    VHD_METADATA_WRITE_FAILURE = 0xC03A_0011,
    VHD_INVALID_SIZE = 0xC03A_0012,
    VHD_INVALID_FILE_SIZE = 0xC03A_0013,
    VIRTDISK_PROVIDER_NOT_FOUND = 0xC03A_0014,
    VIRTDISK_NOT_VIRTUAL_DISK = 0xC03A_0015,
    VHD_PARENT_VHD_ACCESS_DENIED = 0xC03A_0016,
    VHD_CHILD_PARENT_SIZE_MISMATCH = 0xC03A_0017,
    VHD_DIFFERENCING_CHAIN_CYCLE_DETECTED = 0xC03A_0018,
    VHD_DIFFERENCING_CHAIN_ERROR_IN_PARENT = 0xC03A_0019,
    VIRTUAL_DISK_LIMITATION = 0xC03A_001A,
    VHD_INVALID_TYPE = 0xC03A_001B,
    VHD_INVALID_STATE = 0xC03A_001C,
    VIRTDISK_UNSUPPORTED_DISK_SECTOR_SIZE = 0xC03A_001D,
    VIRTDISK_DISK_ALREADY_OWNED = 0xC03A_001E,
    VIRTDISK_DISK_ONLINE_AND_WRITABLE = 0xC03A_001F,
    CTLOG_TRACKING_NOT_INITIALIZED = 0xC03A_0020,
    CTLOG_LOGFILE_SIZE_EXCEEDED_MAXSIZE = 0xC03A_0021,
    CTLOG_VHD_CHANGED_OFFLINE = 0xC03A_0022,
    CTLOG_INVALID_TRACKING_STATE = 0xC03A_0023,
    CTLOG_INCONSISTENT_TRACKING_FILE = 0xC03A_0024,
    VHD_METADATA_FULL = 0xC03A_0028,
    VHD_INVALID_CHANGE_TRACKING_ID = 0xC03A_0029,
    VHD_CHANGE_TRACKING_DISABLED = 0xC03A_002A,
    VHD_MISSING_CHANGE_TRACKING_INFORMATION = 0xC03A_0030,
    VHD_RESIZE_WOULD_TRUNCATE_DATA = 0xC03A_0031,
    VHD_COULD_NOT_COMPUTE_MINIMUM_VIRTUAL_SIZE = 0xC03A_0032,
    VHD_ALREADY_AT_OR_BELOW_MINIMUM_VIRTUAL_SIZE = 0xC03A_0033,
    VHD_UNEXPECTED_ID = 0xC03A_0034,

    // Error, facility 0x040
    RKF_KEY_NOT_FOUND = 0xC040_0001,
    RKF_DUPLICATE_KEY = 0xC040_0002,
    RKF_BLOB_FULL = 0xC040_0003,
    RKF_STORE_FULL = 0xC040_0004,
    RKF_FILE_BLOCKED = 0xC040_0005,
    RKF_ACTIVE_KEY = 0xC040_0006,

    // Error, facility 0x041
    RDBSS_RESTART_OPERATION = 0xC041_0001,
    RDBSS_CONTINUE_OPERATION = 0xC041_0002,
    RDBSS_POST_OPERATION = 0xC041_0003,
    RDBSS_RETRY_LOOKUP = 0xC041_0004,

    // Error, facility 0x042
    BTH_ATT_INVALID_HANDLE = 0xC042_0001,
    BTH_ATT_READ_NOT_PERMITTED = 0xC042_0002,
    BTH_ATT_WRITE_NOT_PERMITTED = 0xC042_0003,
    BTH_ATT_INVALID_PDU = 0xC042_0004,
    BTH_ATT_INSUFFICIENT_AUTHENTICATION = 0xC042_0005,
    BTH_ATT_REQUEST_NOT_SUPPORTED = 0xC042_0006,
    BTH_ATT_INVALID_OFFSET = 0xC042_0007,
    BTH_ATT_INSUFFICIENT_AUTHORIZATION = 0xC042_0008,
    BTH_ATT_PREPARE_QUEUE_FULL = 0xC042_0009,
    BTH_ATT_ATTRIBUTE_NOT_FOUND = 0xC042_000A,
    BTH_ATT_ATTRIBUTE_NOT_LONG = 0xC042_000B,
    BTH_ATT_INSUFFICIENT_ENCRYPTION_KEY_SIZE = 0xC042_000C,
    BTH_ATT_INVALID_ATTRIBUTE_VALUE_LENGTH = 0xC042_000D,
    BTH_ATT_UNLIKELY = 0xC042_000E,
    BTH_ATT_INSUFFICIENT_ENCRYPTION = 0xC042_000F,
    BTH_ATT_UNSUPPORTED_GROUP_TYPE = 0xC042_0010,
    BTH_ATT_INSUFFICIENT_RESOURCES = 0xC042_0011,
    BTH_ATT_UNKNOWN_ERROR = 0xC042_1000,

    // Error, facility 0x043
    SECUREBOOT_ROLLBACK_DETECTED = 0xC043_0001,
    SECUREBOOT_POLICY_VIOLATION = 0xC043_0002,
    SECUREBOOT_INVALID_POLICY = 0xC043_0003,
    SECUREBOOT_POLICY_PUBLISHER_NOT_FOUND = 0xC043_0004,
    SECUREBOOT_POLICY_NOT_SIGNED = 0xC043_0005,
    SECUREBOOT_FILE_REPLACED = 0xC043_0007,
    SECUREBOOT_POLICY_NOT_AUTHORIZED = 0xC043_0008,
    SECUREBOOT_POLICY_UNKNOWN = 0xC043_0009,
    SECUREBOOT_POLICY_MISSING_ANTIROLLBACKVERSION = 0xC043_000A,
    SECUREBOOT_PLATFORM_ID_MISMATCH = 0xC043_000B,
    SECUREBOOT_POLICY_ROLLBACK_DETECTED = 0xC043_000C,
    SECUREBOOT_POLICY_UPGRADE_MISMATCH = 0xC043_000D,
    SECUREBOOT_REQUIRED_POLICY_FILE_MISSING = 0xC043_000E,
    SECUREBOOT_NOT_BASE_POLICY = 0xC043_000F,
    SECUREBOOT_NOT_SUPPLEMENTAL_POLICY = 0xC043_0010,

    // Error, facility 0x044
    AUDIO_ENGINE_NODE_NOT_FOUND = 0xC044_0001,
    HDAUDIO_EMPTY_CONNECTION_LIST = 0xC044_0002,
    HDAUDIO_CONNECTION_LIST_NOT_SUPPORTED = 0xC044_0003,
    HDAUDIO_NO_LOGICAL_DEVICES_CREATED = 0xC044_0004,
    HDAUDIO_NULL_LINKED_LIST_ENTRY = 0xC044_0005,

    // Error, facility 0x045
    VSM_NOT_INITIALIZED = 0xC045_0000,
    VSM_DMA_PROTECTION_NOT_IN_USE = 0xC045_0001,

    // Error, facility 0x046
    IORING_REQUIRED_FLAG_NOT_SUPPORTED = 0xC046_0001,
    IORING_SUBMISSION_QUEUE_FULL = 0xC046_0002,
    IORING_VERSION_NOT_SUPPORTED = 0xC046_0003,
    IORING_SUBMISSION_QUEUE_TOO_BIG = 0xC046_0004,
    IORING_COMPLETION_QUEUE_TOO_BIG = 0xC046_0005,
    IORING_SUBMIT_IN_PROGRESS = 0xC046_0006,
    IORING_CORRUPT = 0xC046_0007,
    IORING_COMPLETION_QUEUE_TOO_FULL = 0xC046_0008,

    // Error, facility 0x050
    VOLSNAP_BOOTFILE_NOT_VALID = 0xC050_0003,
    VOLSNAP_ACTIVATION_TIMEOUT = 0xC050_0004,
    VOLSNAP_NO_BYPASSIO_WITH_SNAPSHOT = 0xC050_0005,

    // Error, facility 0x051
    IO_PREEMPTED = 0xC051_0001,

    // Error, facility 0x05C
    SVHDX_ERROR_STORED = 0xC05C_0000,
    SVHDX_ERROR_NOT_AVAILABLE = 0xC05C_FF00,
    SVHDX_UNIT_ATTENTION_AVAILABLE = 0xC05C_FF01,
    SVHDX_UNIT_ATTENTION_CAPACITY_DATA_CHANGED = 0xC05C_FF02,
    SVHDX_UNIT_ATTENTION_RESERVATIONS_PREEMPTED = 0xC05C_FF03,
    SVHDX_UNIT_ATTENTION_RESERVATIONS_RELEASED = 0xC05C_FF04,
    SVHDX_UNIT_ATTENTION_REGISTRATIONS_PREEMPTED = 0xC05C_FF05,
    SVHDX_UNIT_ATTENTION_OPERATING_DEFINITION_CHANGED = 0xC05C_FF06,
    SVHDX_RESERVATION_CONFLICT = 0xC05C_FF07,
    SVHDX_WRONG_FILE_TYPE = 0xC05C_FF08,
    SVHDX_VERSION_MISMATCH = 0xC05C_FF09,
    VHD_SHARED = 0xC05C_FF0A,
    SVHDX_NO_INITIATOR = 0xC05C_FF0B,
    VHDSET_BACKING_STORAGE_NOT_FOUND = 0xC05C_FF0C,

    // Error, facility 0x05D
    SMB_NO_PREAUTH_INTEGRITY_HASH_OVERLAP = 0xC05D_0000,
    SMB_BAD_CLUSTER_DIALECT = 0xC05D_0001,
    SMB_GUEST_LOGON_BLOCKED = 0xC05D_0002,
    SMB_NO_SIGNING_ALGORITHM_OVERLAP = 0xC05D_0003,
    NETWORK_AUTHENTICATION_PROMPT_CANCELED = 0xC05D_0004,

    // Error, facility 0x0E7
    SPACES_FAULT_DOMAIN_TYPE_INVALID = 0xC0E7_0001,
    SPACES_RESILIENCY_TYPE_INVALID = 0xC0E7_0003,
    SPACES_DRIVE_SECTOR_SIZE_INVALID = 0xC0E7_0004,
    SPACES_DRIVE_REDUNDANCY_INVALID = 0xC0E7_0006,
    SPACES_NUMBER_OF_DATA_COPIES_INVALID = 0xC0E7_0007,
    SPACES_INTERLEAVE_LENGTH_INVALID = 0xC0E7_0009,
    SPACES_NUMBER_OF_COLUMNS_INVALID = 0xC0E7_000A,
    SPACES_NOT_ENOUGH_DRIVES = 0xC0E7_000B,
    SPACES_EXTENDED_ERROR = 0xC0E7_000C,
    SPACES_PROVISIONING_TYPE_INVALID = 0xC0E7_000D,
    SPACES_ALLOCATION_SIZE_INVALID = 0xC0E7_000E,
    SPACES_ENCLOSURE_AWARE_INVALID = 0xC0E7_000F,
    SPACES_WRITE_CACHE_SIZE_INVALID = 0xC0E7_0010,
    SPACES_NUMBER_OF_GROUPS_INVALID = 0xC0E7_0011,
    SPACES_DRIVE_OPERATIONAL_STATE_INVALID = 0xC0E7_0012,
    SPACES_UPDATE_COLUMN_STATE = 0xC0E7_0013,
    SPACES_MAP_REQUIRED = 0xC0E7_0014,
    SPACES_UNSUPPORTED_VERSION = 0xC0E7_0015,
    SPACES_CORRUPT_METADATA = 0xC0E7_0016,
    SPACES_DRT_FULL = 0xC0E7_0017,
    SPACES_INCONSISTENCY = 0xC0E7_0018,
    SPACES_LOG_NOT_READY = 0xC0E7_0019,
    SPACES_NO_REDUNDANCY = 0xC0E7_001A,
    SPACES_DRIVE_NOT_READY = 0xC0E7_001B,
    SPACES_DRIVE_SPLIT = 0xC0E7_001C,
    SPACES_DRIVE_LOST_DATA = 0xC0E7_001D,
    SPACES_ENTRY_INCOMPLETE = 0xC0E7_001E,
    SPACES_ENTRY_INVALID = 0xC0E7_001F,
    SPACES_MARK_DIRTY = 0xC0E7_0020,
    SPACES_PD_NOT_FOUND = 0xC0E7_0021,
    SPACES_PD_LENGTH_MISMATCH = 0xC0E7_0022,
    SPACES_PD_UNSUPPORTED_VERSION = 0xC0E7_0023,
    SPACES_PD_INVALID_DATA = 0xC0E7_0024,
    SPACES_FLUSH_METADATA = 0xC0E7_0025,
    SPACES_CACHE_FULL = 0xC0E7_0026,
    SPACES_REPAIR_IN_PROGRESS = 0xC0E7_0027,

    // Error, facility 0x0E8
    SECCORE_INVALID_COMMAND = 0xC0E8_0000,

    // Error, facility 0x0E9
    SYSTEM_INTEGRITY_ROLLBACK_DETECTED = 0xC0E9_0001,
    SYSTEM_INTEGRITY_POLICY_VIOLATION = 0xC0E9_0002,
    SYSTEM_INTEGRITY_INVALID_POLICY = 0xC0E9_0003,
    SYSTEM_INTEGRITY_POLICY_NOT_SIGNED = 0xC0E9_0004,
    SYSTEM_INTEGRITY_TOO_MANY_POLICIES = 0xC0E9_0005,
    SYSTEM_INTEGRITY_SUPPLEMENTAL_POLICY_NOT_AUTHORIZED = 0xC0E9_0006,
    SYSTEM_INTEGRITY_REPUTATION_MALICIOUS = 0xC0E9_0007,
    SYSTEM_INTEGRITY_REPUTATION_PUA = 0xC0E9_0008,
    SYSTEM_INTEGRITY_REPUTATION_DANGEROUS_EXT = 0xC0E9_0009,
    SYSTEM_INTEGRITY_REPUTATION_OFFLINE = 0xC0E9_000A,
    SYSTEM_INTEGRITY_REPUTATION_UNFRIENDLY_FILE = 0xC0E9_000B,
    SYSTEM_INTEGRITY_REPUTATION_UNATTAINABLE = 0xC0E9_000C,
    SYSTEM_INTEGRITY_REPUTATION_EXPLICIT_DENY_FILE = 0xC0E9_000D,

    // Error, facility 0x0EA
    NO_APPLICABLE_APP_LICENSES_FOUND = 0xC0EA_0001,
    CLIP_LICENSE_NOT_FOUND = 0xC0EA_0002,
    CLIP_DEVICE_LICENSE_MISSING = 0xC0EA_0003,
    CLIP_LICENSE_INVALID_SIGNATURE = 0xC0EA_0004,
    CLIP_KEYHOLDER_LICENSE_MISSING_OR_INVALID = 0xC0EA_0005,
    CLIP_LICENSE_EXPIRED = 0xC0EA_0006,
    CLIP_LICENSE_SIGNED_BY_UNKNOWN_SOURCE = 0xC0EA_0007,
    CLIP_LICENSE_NOT_SIGNED = 0xC0EA_0008,
    CLIP_LICENSE_HARDWARE_ID_OUT_OF_TOLERANCE = 0xC0EA_0009,
    CLIP_LICENSE_DEVICE_ID_MISMATCH = 0xC0EA_000A,

    // Error, facility 0x0EB
    PLATFORM_MANIFEST_NOT_AUTHORIZED = 0xC0EB_0001,
    PLATFORM_MANIFEST_INVALID = 0xC0EB_0002,
    PLATFORM_MANIFEST_FILE_NOT_AUTHORIZED = 0xC0EB_0003,
    PLATFORM_MANIFEST_CATALOG_NOT_AUTHORIZED = 0xC0EB_0004,
    PLATFORM_MANIFEST_BINARY_ID_NOT_FOUND = 0xC0EB_0005,
    PLATFORM_MANIFEST_NOT_ACTIVE = 0xC0EB_0006,
    PLATFORM_MANIFEST_NOT_SIGNED = 0xC0EB_0007,

    // Error, facility 0x0EC
    APPEXEC_CONDITION_NOT_SATISFIED = 0xC0EC_0000,
    APPEXEC_HANDLE_INVALIDATED = 0xC0EC_0001,
    APPEXEC_INVALID_HOST_GENERATION = 0xC0EC_0002,
    APPEXEC_UNEXPECTED_PROCESS_REGISTRATION = 0xC0EC_0003,
    APPEXEC_INVALID_HOST_STATE = 0xC0EC_0004,
    APPEXEC_NO_DONOR = 0xC0EC_0005,
    APPEXEC_HOST_ID_MISMATCH = 0xC0EC_0006,
    APPEXEC_UNKNOWN_USER = 0xC0EC_0007,
    APPEXEC_APP_COMPAT_BLOCK = 0xC0EC_0008,
    APPEXEC_CALLER_WAIT_TIMEOUT = 0xC0EC_0009,
    APPEXEC_CALLER_WAIT_TIMEOUT_TERMINATION = 0xC0EC_000A,
    APPEXEC_CALLER_WAIT_TIMEOUT_LICENSING = 0xC0EC_000B,
    APPEXEC_CALLER_WAIT_TIMEOUT_RESOURCES = 0xC0EC_000C,
}
