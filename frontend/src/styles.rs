pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_SM: &str = "max-w-md mx-auto px-4 sm:px-6 py-8";
pub const CONTAINER_LG: &str = "max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800 disabled:opacity-50";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700 disabled:opacity-50";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 rounded-lg transition-colors duration-200";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const FORM: &str = "mt-4 space-y-4";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const LOADING_SPINNER: &str = "animate-spin h-5 w-5 text-blue-600 dark:text-blue-400";

// Modals
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-[1100] bg-black/80 backdrop-blur-md overflow-y-auto";
pub const MODAL_WRAPPER: &str = "flex min-h-full items-center justify-center p-4 text-center";
pub const MODAL_PANEL: &str = "relative w-full max-w-md transform overflow-hidden rounded-lg bg-white dark:bg-gray-900 p-6 text-left shadow-xl";
pub const MODAL_ACTIONS: &str = "mt-6 flex flex-col sm:flex-row-reverse gap-3";

// Board
pub const WORD_SLOT: &str = "w-8 h-10 sm:w-10 sm:h-12 flex items-end justify-center border-b-4 border-gray-700 dark:border-gray-300 text-2xl font-bold text-gray-900 dark:text-white";
pub const GUESSED_HIT: &str = "px-2 py-1 rounded bg-green-500 text-black text-sm font-bold";
pub const GUESSED_MISS: &str = "px-2 py-1 rounded bg-red-300 dark:bg-red-400 text-black text-sm font-bold line-through";
pub const SCORE_ROW: &str = "flex justify-between py-1 text-gray-700 dark:text-gray-300";
pub const SCORE_ROW_LOCAL: &str = "flex justify-between py-1 font-bold text-blue-600 dark:text-blue-400";
