use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEnvelope, FaPhone};
use dioxus_free_icons::Icon;

use crate::model::hotel::ContactInfo;

/// Contact details and an enquiry form.
///
/// The form has no backend, submitting it only acknowledges the message in place.
#[component]
pub fn ContactSection(contact: ContactInfo) -> Element {
    let mut sent = use_signal(|| false);

    rsx! {
        section { id: "contact", class: "py-20 bg-slate-50",
            div { class: "container mx-auto px-6 grid md:grid-cols-2 gap-12",
                div {
                    p { class: "text-amber-600 font-semibold tracking-widest uppercase mb-2", "Get In Touch" }
                    h2 { class: "text-4xl font-bold text-slate-800 mb-6", "Contact Us" }
                    p { class: "text-slate-600 mb-8",
                        "Have a question or want to book a stay? Fill out the form below, and our team will get back to you shortly."
                    }
                    ul { class: "flex flex-col gap-4 text-slate-700",
                        li { class: "flex items-center gap-3",
                            Icon { width: 16, height: 16, icon: FaPhone }
                            a { href: "tel:{contact.phone}", "{contact.phone}" }
                        }
                        li { class: "flex items-center gap-3",
                            Icon { width: 16, height: 16, icon: FaEnvelope }
                            a { href: "mailto:{contact.email}", "{contact.email}" }
                        }
                    }
                }
                if sent() {
                    div { class: "bg-white rounded-2xl shadow-md p-8 flex items-center justify-center text-center",
                        p { class: "text-slate-700", "Thank you for your message. We will be in touch soon." }
                    }
                } else {
                    form {
                        class: "bg-white rounded-2xl shadow-md p-8 flex flex-col gap-4",
                        onsubmit: move |event: FormEvent| {
                            event.prevent_default();
                            sent.set(true);
                        },
                        input { class: "input input-bordered w-full", r#type: "text", name: "name", placeholder: "Full Name", required: true }
                        input { class: "input input-bordered w-full", r#type: "email", name: "email", placeholder: "Email Address", required: true }
                        input { class: "input input-bordered w-full", r#type: "text", name: "subject", placeholder: "Subject" }
                        textarea { class: "textarea textarea-bordered w-full h-32", name: "message", placeholder: "Your Message", required: true }
                        button {
                            r#type: "submit",
                            class: "btn bg-amber-500 hover:bg-amber-600 text-white border-none",
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}
