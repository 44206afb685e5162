//! Built-in supported lists for the OpenXR overlay layer.

/// Commands the overlay layer intercepts, in emission order.
pub const SUPPORTED_COMMANDS: &[&str] = &[
	"xrDestroyInstance",
	"xrGetInstanceProperties",
	"xrPollEvent",
	"xrResultToString",
	"xrStructureTypeToString",
	"xrGetSystem",
	"xrGetSystemProperties",
	"xrEnumerateEnvironmentBlendModes",
	"xrCreateSession",
	"xrDestroySession",
	"xrEnumerateReferenceSpaces",
	"xrCreateReferenceSpace",
	"xrGetReferenceSpaceBoundsRect",
	"xrCreateActionSpace",
	"xrLocateSpace",
	"xrDestroySpace",
	"xrEnumerateViewConfigurations",
	"xrGetViewConfigurationProperties",
	"xrEnumerateViewConfigurationViews",
	"xrEnumerateSwapchainFormats",
	"xrCreateSwapchain",
	"xrDestroySwapchain",
	"xrEnumerateSwapchainImages",
	"xrAcquireSwapchainImage",
	"xrWaitSwapchainImage",
	"xrReleaseSwapchainImage",
	"xrBeginSession",
	"xrEndSession",
	"xrRequestExitSession",
	"xrWaitFrame",
	"xrBeginFrame",
	"xrEndFrame",
	"xrLocateViews",
	"xrStringToPath",
	"xrPathToString",
	"xrCreateActionSet",
	"xrDestroyActionSet",
	"xrCreateAction",
	"xrDestroyAction",
	"xrSuggestInteractionProfileBindings",
	"xrAttachSessionActionSets",
	"xrGetCurrentInteractionProfile",
	"xrGetActionStateBoolean",
	"xrGetActionStateFloat",
	"xrGetActionStateVector2f",
	"xrGetActionStatePose",
	"xrSyncActions",
	"xrEnumerateBoundSourcesForAction",
	"xrGetInputSourceLocalizedName",
	"xrApplyHapticFeedback",
	"xrStopHapticFeedback",
	"xrGetD3D11GraphicsRequirementsKHR",
	"xrSetDebugUtilsObjectNameEXT",
	"xrCreateDebugUtilsMessengerEXT",
	"xrDestroyDebugUtilsMessengerEXT",
	"xrSubmitDebugUtilsMessageEXT",
	"xrSessionBeginDebugUtilsLabelRegionEXT",
	"xrSessionEndDebugUtilsLabelRegionEXT",
	"xrSessionInsertDebugUtilsLabelEXT",
];

/// Handle types that get a tracking map, in emission order.
pub const SUPPORTED_HANDLES: &[&str] = &[
	"XrInstance",
	"XrSession",
	"XrActionSet",
	"XrAction",
	"XrSwapchain",
	"XrSpace",
	"XrDebugUtilsMessengerEXT",
];
