pub mod shared {
    pub mod core {
        pub mod event_calendar;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod notifier;
    }
}

pub mod modules {
    pub mod directory {
        pub mod core {
            pub mod user;
        }
        pub mod use_cases {
            pub mod resolve_caller {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod directory;
                pub mod directory_in_memory;
            }
        }
    }

    pub mod consultations {
        pub mod core {
            pub mod errors;
            pub mod intents;
            pub mod slot;
            pub mod views;
        }
        pub mod use_cases {
            pub mod list_topics {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_candidate_slots {
                pub mod generate;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod book_slot {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod cancel_booking {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_bookings {
                pub mod handler;
                pub mod schedule_text;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod intent_dispatch;
                pub mod ledger;
                pub mod ledger_in_memory;
            }
        }
    }

    pub mod workshops {
        pub mod core {
            pub mod errors;
            pub mod workshop;
        }
        pub mod use_cases {
            pub mod registrations {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod registrations;
                pub mod registrations_in_memory;
            }
        }
    }

    pub mod assessments {
        pub mod core {
            pub mod errors;
            pub mod results;
        }
        pub mod use_cases {
            pub mod quiz_results {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod test_results {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod results;
                pub mod results_in_memory;
            }
        }
    }
}

pub mod shell;
